//! The fixed toggle-command table.
//!
//! Three commands ship with the host: the primary toggle plus two secondary
//! slots.  Each command reads its target reference from a title entry and
//! carries the definition of its status line (visibility switch, label
//! entry, ordering position, tooltip).  The table is static; which settings
//! the commands act on is entirely configuration-driven.

use crate::application::keys;

/// Status-line definition for one toggle command.
#[derive(Debug, Clone, Copy)]
pub struct StatusBarItemConfig {
    /// Configuration entry switching this command's status line on or off.
    pub visibility_key: &'static str,
    /// Configuration entry holding the status-line label.
    pub label_key: &'static str,
    /// Ordering position; higher positions render further left.
    pub position: u8,
    /// Hover text describing the command.
    pub tooltip: &'static str,
}

/// One toggle command: an id, the title entry naming its target setting,
/// and its status-line definition.
#[derive(Debug, Clone, Copy)]
pub struct ToggleCommand {
    /// Stable command id, used on the command line.
    pub id: &'static str,
    /// Configuration entry whose value is the setting reference to toggle.
    pub title_key: &'static str,
    pub status_bar: StatusBarItemConfig,
}

/// All toggle commands the host registers.
pub static COMMANDS: [ToggleCommand; 3] = [
    ToggleCommand {
        id: "primary",
        title_key: keys::SETTING_TITLE,
        status_bar: StatusBarItemConfig {
            visibility_key: keys::SHOW_STATUSBAR_PRIMARY,
            label_key: keys::PRIMARY_SETTING_TEXT,
            position: 3,
            tooltip: "Setting Toggle - Primary Setting",
        },
    },
    ToggleCommand {
        id: "s1",
        title_key: keys::SETTING_1_TITLE,
        status_bar: StatusBarItemConfig {
            visibility_key: keys::SHOW_STATUSBAR_S1,
            label_key: keys::SETTING_STATE_1_TEXT,
            position: 2,
            tooltip: "Setting Toggle - State 1 Setting",
        },
    },
    ToggleCommand {
        id: "s2",
        title_key: keys::SETTING_2_TITLE,
        status_bar: StatusBarItemConfig {
            visibility_key: keys::SHOW_STATUSBAR_S2,
            label_key: keys::SETTING_STATE_2_TEXT,
            position: 1,
            tooltip: "Setting Toggle - State 2 Setting",
        },
    },
];

/// Looks up a command by id.
pub fn find(id: &str) -> Option<&'static ToggleCommand> {
    COMMANDS.iter().find(|c| c.id == id)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
