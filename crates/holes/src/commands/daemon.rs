pub fn execute() {
    if let Err(e) = holes_windows::daemon::run() {
        holes_core::log_error!("Daemon error: {e}");
        eprintln!("Daemon error: {e}");
        std::process::exit(1);
    }
}
