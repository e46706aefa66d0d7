pub mod action;
pub mod config;
pub mod controller;
pub mod dock;
pub mod edge;
pub mod error;
pub mod event;
pub mod geometry;
pub mod ipc;
pub mod log;
pub mod pid;
pub mod rect;
pub mod window;

#[cfg(test)]
mod testing;

pub use action::Action;
pub use config::{Config, DockingConfig};
pub use controller::{HoleStatus, StripController, StripState};
pub use dock::{AppBarClient, DockClient, Registration, RepositionNotifier, ShellService};
pub use edge::Edge;
pub use error::{HoleError, HoleResult};
pub use event::{RepositionRequested, StripEvent};
pub use geometry::{DockSpec, Rejection};
pub use ipc::{Command, PIPE_NAME, Response};
pub use rect::Rect;
pub use window::{MonitorSource, StripWindow, WindowResult};
