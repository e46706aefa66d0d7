/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `holes init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Desktop Holes configuration
# Location: ~/.config/desktop-holes/config.toml

[docking]
# Maximum distance in pixels between the selection and a monitor edge
# for the selection to snap to that edge.
snap_threshold = 24
# Thinnest strip in pixels that may be reserved.
min_thickness = 2

[logging]
# Enable file logging to ~/.config/desktop-holes/logs/holes.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}

/// Generates the default `keybindings.toml` contents with explanatory comments.
pub fn generate_keybindings() -> String {
    r##"# Desktop Holes keybindings
# Location: ~/.config/desktop-holes/keybindings.toml
#
# Each [[keybinding]] entry maps a key combination to an action.
#
# Available actions: remove-hole, stop
# Available modifiers: alt, shift, ctrl, win
#
# Key names: A-Z, 0-9, F1-F24, Enter, Space, Tab, Escape, Pause,
#            Left, Right, Up, Down, Delete, Home, End

# Remove the current hole: Ctrl + Win + Alt + P
[[keybinding]]
action = "remove-hole"
key = "P"
modifiers = ["ctrl", "win", "alt"]
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, KeybindingsFile};

    #[test]
    fn config_template_parses_to_defaults() {
        // Act
        let config: Config = toml::from_str(&generate_config()).unwrap();

        // Assert
        assert_eq!(config.docking.snap_threshold, 24);
        assert_eq!(config.docking.min_thickness, 2);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn keybindings_template_matches_defaults() {
        // Act
        let file: KeybindingsFile = toml::from_str(&generate_keybindings()).unwrap();

        // Assert
        let defaults = crate::config::keybinding::defaults();
        assert_eq!(file.keybinding.len(), defaults.len());
        assert_eq!(file.keybinding[0].action, defaults[0].action);
        assert_eq!(file.keybinding[0].modifiers, defaults[0].modifiers);
    }
}
