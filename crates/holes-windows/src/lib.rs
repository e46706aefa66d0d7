//! Windows platform layer for Desktop Holes.
//!
//! Everything here is Win32-specific; on other targets the crate is
//! empty and the CLI only offers its platform-independent commands.
#![cfg(windows)]

/// Shell bar registry (`SHAppBarMessage`).
pub mod appbar;

/// Start-on-logon registration.
pub mod autostart;

/// Daemon main loop.
pub mod daemon;

mod dpi;
mod hotkey;

/// IPC via Named Pipes.
pub mod ipc;

mod keys;

/// The strip window.
pub mod mask;

/// Monitor enumeration.
pub mod monitor;

/// Process utilities (alive check, kill).
pub mod process;

pub use appbar::Win32Shell;
pub use mask::MaskWindow;
pub use monitor::Win32Monitors;
