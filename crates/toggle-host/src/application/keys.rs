//! Well-known configuration entries and their packaged defaults.
//!
//! Everything under the `toggle.` namespace configures the toggler itself;
//! the values of the title entries are the setting references the commands
//! act on (indirection is intentional: the same command can target
//! different settings in different installs).

/// First candidate state the toggle alternates between.
pub const SETTING_STATE_1: &str = "toggle.settingState1";
/// Second candidate state the toggle alternates between.
pub const SETTING_STATE_2: &str = "toggle.settingState2";

/// Default candidate values, used when the state entries are unset.
pub const STATE_1_DEFAULT: &str = "state1";
pub const STATE_2_DEFAULT: &str = "state2";

/// Title entries: each holds the setting reference its command toggles.
pub const SETTING_TITLE: &str = "toggle.settingTitle";
pub const SETTING_1_TITLE: &str = "toggle.setting1Title";
pub const SETTING_2_TITLE: &str = "toggle.setting2Title";

/// Status-line labels, one per command.
pub const PRIMARY_SETTING_TEXT: &str = "toggle.primarySettingText";
pub const SETTING_STATE_1_TEXT: &str = "toggle.settingState1Text";
pub const SETTING_STATE_2_TEXT: &str = "toggle.settingState2Text";

/// Per-command status-line visibility switches.
pub const SHOW_STATUSBAR_PRIMARY: &str = "toggle.showStatusbarPrimary";
pub const SHOW_STATUSBAR_S1: &str = "toggle.showStatusbarS1";
pub const SHOW_STATUSBAR_S2: &str = "toggle.showStatusbarS2";

/// Global switch for state glyphs on boolean-valued settings.
pub const ICON_ENABLED: &str = "toggle.iconEnabled";
