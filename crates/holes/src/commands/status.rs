use holes_core::Command;

pub fn execute() {
    if holes_windows::ipc::is_daemon_running() {
        super::send::execute(Command::Status);
        return;
    }

    // The pipe is gone: a PID file means either a hung daemon or a
    // leftover from one that was killed.
    match holes_core::pid::read_pid_file() {
        Ok(Some(pid)) if holes_windows::process::is_process_alive(pid) => {
            println!("Desktop Holes process exists (PID: {pid}) but is not responding.");
        }
        Ok(Some(_)) => {
            let _ = holes_core::pid::remove_pid_file();
            println!("Desktop Holes is not running (cleaned up stale PID file).");
        }
        _ => println!("Desktop Holes is not running."),
    }
}
