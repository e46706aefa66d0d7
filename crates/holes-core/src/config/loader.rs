use std::path::PathBuf;

use super::keybinding;
use super::{Config, Keybinding, KeybindingsFile};

/// Returns the config directory: `~/.config/desktop-holes/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("desktop-holes"))
}

/// Returns the config file path: `~/.config/desktop-holes/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Returns the keybindings file path: `~/.config/desktop-holes/keybindings.toml`.
pub fn keybindings_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("keybindings.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = read(&path)?;
    let mut config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// After loading, values are clamped to safe ranges via [`Config::validate`].
/// Non-existent files silently return defaults; other errors are reported.
pub fn load() -> Config {
    load_or_default(try_load, Config::default)
}

/// Tries to load and parse `keybindings.toml`.
pub fn try_load_keybindings() -> Result<Vec<Keybinding>, String> {
    let path = keybindings_path().ok_or("could not determine keybindings path")?;
    let content = read(&path)?;
    let file: KeybindingsFile =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(file.keybinding)
}

/// Loads keybindings from `~/.config/desktop-holes/keybindings.toml`.
///
/// Falls back to the built-in defaults if the file is missing or invalid.
pub fn load_keybindings() -> Vec<Keybinding> {
    load_or_default(try_load_keybindings, keybinding::defaults)
}

/// Marker error for a config file that does not exist.
const NOT_FOUND: &str = "not found";

fn read(path: &std::path::Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => NOT_FOUND.to_string(),
        _ => format!("{}: {e}", path.display()),
    })
}

/// Loads a config value from disk, falling back to defaults.
fn load_or_default<T>(try_load: impl FnOnce() -> Result<T, String>, default: impl Fn() -> T) -> T {
    match try_load() {
        Ok(val) => val,
        Err(e) if e == NOT_FOUND => default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            crate::log_warn!("Config fallback to defaults: {e}");
            default()
        }
    }
}
