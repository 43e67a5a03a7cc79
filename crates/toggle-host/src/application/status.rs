//! Status-line presentation for toggle commands.
//!
//! A pure presenter over store reads: no terminal I/O happens here.  For
//! each command whose visibility switch, title entry, and the global icon
//! switch are all set, one [`StatusLine`] is produced.  Boolean-valued
//! settings get an on/off glyph appended to their label so the state is
//! visible at a glance; other value kinds render the label alone.

use serde_json::Value;
use toggle_core::{extract, SettingReference, SettingScope, ToggleValue};

use crate::application::commands::{self, ToggleCommand};
use crate::application::keys;
use crate::application::store::SettingsStore;

/// Glyph pair rendered after the label of a boolean-valued setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusGlyphs {
    pub on: String,
    pub off: String,
}

impl Default for StatusGlyphs {
    fn default() -> Self {
        Self {
            on: "on".to_string(),
            off: "off".to_string(),
        }
    }
}

/// One rendered status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Id of the command this line belongs to.
    pub command_id: &'static str,
    /// The rendered text, label plus optional state glyph.
    pub text: String,
    /// Hover text describing the command.
    pub tooltip: &'static str,
    /// Ordering position; higher renders further left.
    pub position: u8,
}

/// Renders the status lines for all visible commands, leftmost first.
pub fn status_lines(store: &dyn SettingsStore, glyphs: &StatusGlyphs) -> Vec<StatusLine> {
    let icon_enabled = get_flag(store, keys::ICON_ENABLED);

    let mut lines: Vec<StatusLine> = commands::COMMANDS
        .iter()
        .filter_map(|command| render_line(store, command, glyphs, icon_enabled))
        .collect();

    lines.sort_by(|a, b| b.position.cmp(&a.position));
    lines
}

/// Renders a single command's line, or `None` when it is hidden.
fn render_line(
    store: &dyn SettingsStore,
    command: &ToggleCommand,
    glyphs: &StatusGlyphs,
    icon_enabled: bool,
) -> Option<StatusLine> {
    // A line shows only when its switch is on, its command is configured,
    // and the global icon switch is on.
    if !icon_enabled || !get_flag(store, command.status_bar.visibility_key) {
        return None;
    }
    let title = get_text(store, command.title_key)?;

    let label =
        get_text(store, command.status_bar.label_key).unwrap_or_else(|| command.id.to_string());

    let text = match current_value(store, &title) {
        Some(ToggleValue::Bool(state)) => {
            let glyph = if state { &glyphs.on } else { &glyphs.off };
            format!("{label}: {glyph}")
        }
        _ => label,
    };

    Some(StatusLine {
        command_id: command.id,
        text,
        tooltip: command.status_bar.tooltip,
        position: command.status_bar.position,
    })
}

/// Reads the current (sub-)value of the setting a reference names.
fn current_value(store: &dyn SettingsStore, reference: &str) -> Option<ToggleValue> {
    let resolved = SettingReference::parse(reference);
    if resolved.key.is_empty() {
        return None;
    }
    let full = store.get(&resolved.scope, &resolved.key)?;
    match &resolved.sub_path {
        Some(path) => ToggleValue::from_json(extract(&full, path)?),
        None => ToggleValue::from_json(&full),
    }
}

fn get_flag(store: &dyn SettingsStore, key: &str) -> bool {
    matches!(store.get(&SettingScope::Global, key), Some(Value::Bool(true)))
}

fn get_text(store: &dyn SettingsStore, key: &str) -> Option<String> {
    match store.get(&SettingScope::Global, key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
