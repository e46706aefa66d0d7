use holes_core::ipc::ResponseStatus;

pub fn execute() {
    // Graceful shutdown first: the daemon releases the hole itself.
    if holes_windows::ipc::is_daemon_running() {
        match holes_windows::ipc::send_command(&holes_core::Command::Stop) {
            Ok(response) if response.status == ResponseStatus::Ok => {
                println!(
                    "Desktop Holes stopped. {}",
                    response.message.unwrap_or_default()
                );
                let _ = holes_core::pid::remove_pid_file();
                return;
            }
            Ok(response) => {
                eprintln!(
                    "Error: {}",
                    response.message.unwrap_or("unknown error".into())
                );
                return;
            }
            Err(e) => eprintln!("IPC failed: {e}"),
        }
    }

    // The pipe is gone but the process may still be alive.
    match holes_core::pid::read_pid_file() {
        Ok(Some(pid)) if holes_windows::process::is_process_alive(pid) => {
            if holes_windows::process::kill_process(pid) {
                let _ = holes_core::pid::remove_pid_file();
                println!("Desktop Holes stopped (killed PID {pid}).");
            } else {
                eprintln!("Failed to kill process {pid}.");
                std::process::exit(1);
            }
        }
        _ => println!("Desktop Holes is not running."),
    }
}
