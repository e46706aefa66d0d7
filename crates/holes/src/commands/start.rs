use std::os::windows::process::CommandExt;
use std::process::{Command, Stdio};

/// `CREATE_NO_WINDOW | CREATE_NEW_PROCESS_GROUP`: no console, and Ctrl+C
/// in the launching terminal does not reach the daemon.
const DETACH_FLAGS: u32 = 0x0800_0000 | 0x0000_0200;

pub fn execute() {
    if holes_windows::ipc::is_daemon_running() {
        println!("Desktop Holes is already running.");
        return;
    }

    // Clean up a stale PID file from a previous unclean shutdown.
    if let Ok(Some(pid)) = holes_core::pid::read_pid_file() {
        if holes_windows::process::is_process_alive(pid) {
            println!("Desktop Holes process exists (PID: {pid}) but is not responding.");
            return;
        }
        let _ = holes_core::pid::remove_pid_file();
    }

    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            eprintln!("Error: could not resolve the executable path: {e}");
            std::process::exit(1);
        }
    };

    // Re-run ourselves with the hidden `daemon` subcommand, fully detached.
    let spawned = Command::new(exe)
        .arg("daemon")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .creation_flags(DETACH_FLAGS)
        .spawn();

    match spawned {
        Ok(mut child) => {
            let pid = child.id();
            let _ = child.try_wait();
            print_banner(pid);
        }
        Err(e) => {
            eprintln!("Error: failed to start the daemon: {e}");
            std::process::exit(1);
        }
    }
}

fn print_banner(pid: u32) {
    let d = "\x1b[90m"; // dim labels
    let w = "\x1b[1;97m"; // bold values
    let r = "\x1b[0m";

    println!();
    println!("  {w}Desktop Holes{r} v{}", env!("CARGO_PKG_VERSION"));
    println!("  {d}Config{r}   ~/.config/desktop-holes/");
    println!("  {d}Daemon{r}   Started (PID: {w}{pid}{r})");
    println!("  {d}Next{r}     holes set <x> <y> <width> <height>");
    println!("  {d}Remove{r}   Ctrl+Win+Alt+P or 'holes remove'");
    println!();
}
