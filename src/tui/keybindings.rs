//! Keybinding definitions
//!
//! Defines all keyboard shortcuts for different contexts. The help dialog is
//! generated from this table.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Alternate key with the same action, if any
    pub alternate: Option<KeyCode>,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere outside dialogs and editing
    Global,
    /// Active in the expense grid
    Expenses,
    /// Projection parameters
    Parameters,
    /// Active while editing a cell
    Editing,
    /// Active in dialogs
    Dialog,
}

impl KeyContext {
    /// Heading used in the help dialog
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::Expenses => "Expense Grid",
            Self::Parameters => "Projection",
            Self::Editing => "Editing a Cell",
            Self::Dialog => "Dialogs",
        }
    }

    /// Contexts in help display order
    pub const ALL: [KeyContext; 5] = [
        Self::Global,
        Self::Expenses,
        Self::Parameters,
        Self::Editing,
        Self::Dialog,
    ];
}

const fn bind(
    key: KeyCode,
    alternate: Option<KeyCode>,
    description: &'static str,
    context: KeyContext,
) -> Keybinding {
    Keybinding {
        key,
        alternate,
        modifiers: KeyModifiers::NONE,
        description,
        context,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    bind(KeyCode::Char('q'), None, "Quit", KeyContext::Global),
    bind(KeyCode::Char('?'), None, "Help", KeyContext::Global),
    bind(
        KeyCode::Char('b'),
        None,
        "Edit banner (this session)",
        KeyContext::Global,
    ),
    bind(
        KeyCode::Char('x'),
        None,
        "Export report to betteralt-report.json",
        KeyContext::Global,
    ),
    // Expense grid
    bind(
        KeyCode::Char('j'),
        Some(KeyCode::Down),
        "Next expense",
        KeyContext::Expenses,
    ),
    bind(
        KeyCode::Char('k'),
        Some(KeyCode::Up),
        "Previous expense",
        KeyContext::Expenses,
    ),
    bind(
        KeyCode::Char('l'),
        Some(KeyCode::Tab),
        "Next cell",
        KeyContext::Expenses,
    ),
    bind(
        KeyCode::Char('h'),
        Some(KeyCode::BackTab),
        "Previous cell",
        KeyContext::Expenses,
    ),
    bind(
        KeyCode::Enter,
        Some(KeyCode::Char('e')),
        "Edit cell (cycles frequency)",
        KeyContext::Expenses,
    ),
    bind(
        KeyCode::Char(' '),
        Some(KeyCode::Char('f')),
        "Cycle frequency",
        KeyContext::Expenses,
    ),
    bind(KeyCode::Char('a'), None, "Add expense", KeyContext::Expenses),
    bind(KeyCode::Char('d'), None, "Delete expense", KeyContext::Expenses),
    // Parameters
    bind(
        KeyCode::Char('+'),
        Some(KeyCode::Char('=')),
        "Raise return rate 0.5%",
        KeyContext::Parameters,
    ),
    bind(
        KeyCode::Char('-'),
        None,
        "Lower return rate 0.5%",
        KeyContext::Parameters,
    ),
    bind(
        KeyCode::Char(']'),
        None,
        "One more year",
        KeyContext::Parameters,
    ),
    bind(
        KeyCode::Char('['),
        None,
        "One less year",
        KeyContext::Parameters,
    ),
    // Editing
    bind(KeyCode::Enter, None, "Save cell", KeyContext::Editing),
    bind(KeyCode::Tab, None, "Save and edit next cell", KeyContext::Editing),
    bind(KeyCode::Esc, None, "Discard changes", KeyContext::Editing),
    // Dialog
    bind(
        KeyCode::Char('y'),
        Some(KeyCode::Enter),
        "Confirm",
        KeyContext::Dialog,
    ),
    bind(
        KeyCode::Char('n'),
        Some(KeyCode::Esc),
        "Cancel",
        KeyContext::Dialog,
    ),
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

fn format_key(key: KeyCode) -> String {
    match key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", key),
    }
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }

    let mut key_str = format_key(kb.key);
    if let Some(alternate) = kb.alternate {
        key_str = format!("{}/{}", key_str, format_key(alternate));
    }

    parts.push(key_str);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_context_has_bindings() {
        for context in KeyContext::ALL {
            assert!(!get_keybindings(context).is_empty(), "{:?}", context);
        }
    }

    #[test]
    fn test_format_keybinding() {
        let edit = get_keybindings(KeyContext::Expenses)
            .into_iter()
            .find(|kb| kb.description == "Edit cell")
            .unwrap();
        assert_eq!(format_keybinding(edit), "Enter/e");

        let cycle = get_keybindings(KeyContext::Expenses)
            .into_iter()
            .find(|kb| kb.description == "Cycle frequency")
            .unwrap();
        assert_eq!(format_keybinding(cycle), "Space/f");
    }
}
