use serde::{Deserialize, Serialize};

/// An action that can be triggered by a hotkey or CLI command.
///
/// Actions are user-initiated. They are distinct from strip events,
/// which come from the OS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Release the reserved strip and close its window.
    RemoveHole,
    /// Remove any hole and shut the daemon down.
    Stop,
}
