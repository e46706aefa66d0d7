use holes_core::WindowResult;
use holes_core::pid;

use crate::dpi;

#[path = "daemon_ipc.rs"]
mod daemon_ipc;
#[path = "daemon_loop.rs"]
mod daemon_loop;
#[path = "daemon_loop_handlers.rs"]
mod daemon_loop_handlers;
#[path = "daemon_session.rs"]
mod daemon_session;
#[path = "daemon_types.rs"]
mod daemon_types;

/// Runs the Desktop Holes daemon until it is told to stop.
///
/// The calling thread becomes the UI thread: it owns the mask window,
/// the strip controller and the hotkeys, and runs the message pump. A
/// background thread serves the IPC pipe.
pub fn run() -> WindowResult<()> {
    dpi::enable_dpi_awareness();
    pid::write_pid_file()?;

    let result = daemon_loop::daemon_loop();

    let _ = pid::remove_pid_file();
    result
}
