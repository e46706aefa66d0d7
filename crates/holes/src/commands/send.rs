use holes_core::Command;
use holes_core::ipc::ResponseStatus;

/// Sends a command to the running daemon and prints its reply.
///
/// Exits with status 1 when the daemon is down or reports an error.
pub fn execute(command: Command) {
    if !holes_windows::ipc::is_daemon_running() {
        eprintln!("Desktop Holes is not running. Start it with 'holes start'.");
        std::process::exit(1);
    }

    match holes_windows::ipc::send_command(&command) {
        Ok(response) if response.status == ResponseStatus::Ok => {
            if let Some(msg) = response.message {
                println!("{msg}");
            }
        }
        Ok(response) => {
            eprintln!(
                "Error: {}",
                response.message.unwrap_or("unknown error".into())
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to reach the daemon: {e}");
            std::process::exit(1);
        }
    }
}
