use serde::{Deserialize, Serialize};

use crate::Action;

/// A user-configured keybinding that maps a key combination to an action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keybinding {
    /// The action to trigger.
    pub action: Action,
    /// Key name (e.g. "P", "F1", "Delete").
    pub key: String,
    /// Modifier keys (e.g. ["ctrl", "win", "alt"]).
    pub modifiers: Vec<Modifier>,
}

/// Keyboard modifier keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Alt,
    Shift,
    Ctrl,
    Win,
}

/// Returns the default keybindings.
///
/// Remove hole: Ctrl + Win + Alt + P
pub fn defaults() -> Vec<Keybinding> {
    use Modifier::{Alt, Ctrl, Win};

    vec![bind(Action::RemoveHole, "P", &[Ctrl, Win, Alt])]
}

fn bind(action: Action, key: &str, modifiers: &[Modifier]) -> Keybinding {
    Keybinding {
        action,
        key: key.into(),
        modifiers: modifiers.to_vec(),
    }
}
