use holes_core::config;

/// Creates the default configuration files in `~/.config/desktop-holes/`.
///
/// Writes commented `config.toml` and `keybindings.toml` files. Existing
/// files are left alone.
pub fn execute() {
    let Some(dir) = config::config_dir() else {
        eprintln!("Error: could not determine home directory.");
        std::process::exit(1);
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Error: could not create {}: {e}", dir.display());
        std::process::exit(1);
    }

    write_if_missing(
        &dir.join("config.toml"),
        &config::template::generate_config(),
    );
    write_if_missing(
        &dir.join("keybindings.toml"),
        &config::template::generate_keybindings(),
    );

    println!("\nEdit these files to tune edge snapping, logging, and hotkeys.");
    println!("Changes take effect the next time the daemon starts.");
}

fn write_if_missing(path: &std::path::Path, content: &str) {
    if path.exists() {
        println!("Already exists: {}", path.display());
        return;
    }

    match std::fs::write(path, content) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => eprintln!("Error: could not write {}: {e}", path.display()),
    }
}
