use std::sync::mpsc;

use holes_core::ipc::{Command, Response};
use windows::Win32::UI::WindowsAndMessaging::WM_APP;

/// Thread message posted to the UI thread when a request is queued.
pub(super) const WM_WAKE: u32 = WM_APP + 1;

/// A CLI request forwarded by the IPC thread.
pub(super) struct Request {
    pub command: Command,
    pub reply: ResponseSender,
}

/// Sends a response back to the IPC thread for the connected client.
pub(super) type ResponseSender = mpsc::Sender<Response>;

/// Whether the message pump keeps running after a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Stop,
}
