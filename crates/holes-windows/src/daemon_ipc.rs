use std::sync::mpsc;

use holes_core::ipc::{Command, Response};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::PostThreadMessageW;

use crate::ipc::PipeServer;

use super::daemon_types::{Request, ResponseSender, WM_WAKE};

/// Accepts pipe connections and forwards each command to the UI thread.
///
/// Runs on its own thread. After queueing a request it wakes the UI
/// thread's message pump, then blocks until the reply comes back.
pub(super) fn ipc_loop(tx: mpsc::Sender<Request>, ui_thread: u32) {
    loop {
        let server = match PipeServer::create() {
            Ok(s) => s,
            Err(e) => {
                holes_core::log_error!("Failed to create pipe: {e}");
                return;
            }
        };

        let command = match server.accept_command() {
            Ok(cmd) => cmd,
            Err(e) => {
                holes_core::log_warn!("Error reading command: {e}");
                let _ = server.send_response(&Response::error(format!("bad request: {e}")));
                continue;
            }
        };

        let is_stop = matches!(command, Command::Stop);
        let (reply, reply_rx): (ResponseSender, _) = mpsc::channel();
        if tx.send(Request { command, reply }).is_err() {
            return;
        }

        // SAFETY: posting to a thread queue has no pointer arguments.
        unsafe {
            let _ = PostThreadMessageW(ui_thread, WM_WAKE, WPARAM(0), LPARAM(0));
        }

        if let Ok(response) = reply_rx.recv() {
            let _ = server.send_response(&response);
        }

        if is_stop {
            return;
        }
    }
}
