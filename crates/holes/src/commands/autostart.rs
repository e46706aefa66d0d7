//! `holes autostart`, backed by [`holes_windows::autostart`].

pub fn enable() {
    match holes_windows::autostart::enable() {
        Ok(()) => println!("Autostart enabled. Desktop Holes will start on logon."),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

pub fn disable() {
    match holes_windows::autostart::disable() {
        Ok(()) => println!("Autostart disabled."),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

pub fn status() {
    if holes_windows::autostart::is_enabled() {
        println!("Autostart is enabled.");
    } else {
        println!("Autostart is disabled.");
    }
}
