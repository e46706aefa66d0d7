pub mod keybinding;
mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use keybinding::{Keybinding, Modifier};
pub use loader::{
    config_dir, config_path, keybindings_path, load, load_keybindings, try_load,
    try_load_keybindings,
};

/// Top-level configuration for Desktop Holes.
///
/// Loaded from `~/.config/desktop-holes/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Edge snapping policy.
    pub docking: DockingConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Policy knobs for resolving a selection into a docked strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockingConfig {
    /// Maximum distance in pixels between a selection side and a
    /// monitor side for the selection to snap to that edge.
    pub snap_threshold: i32,
    /// Thinnest strip, in pixels, that may be reserved.
    pub min_thickness: i32,
}

impl Default for DockingConfig {
    fn default() -> Self {
        Self {
            snap_threshold: 24,
            min_thickness: 2,
        }
    }
}

impl Config {
    /// Clamps docking values to safe ranges.
    ///
    /// A zero or negative minimum thickness would let the shell register
    /// an invisible bar, so the floor is one pixel.
    pub fn validate(&mut self) {
        self.docking.snap_threshold = self.docking.snap_threshold.clamp(0, 512);
        self.docking.min_thickness = self.docking.min_thickness.clamp(1, 512);
    }
}

/// Wrapper for deserializing the keybindings file.
///
/// The file contains a top-level `[[keybinding]]` array of tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct KeybindingsFile {
    #[serde(default = "keybinding::defaults")]
    keybinding: Vec<Keybinding>,
}
