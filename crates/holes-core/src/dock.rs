//! Registration with the shell's screen-space reservation service.
//!
//! The shell keeps a registry of docked bars (taskbars, toolbars) and
//! carves their rectangles out of every monitor's work area. A window
//! joins the registry once, then negotiates its position in two phases:
//! a *query* that lets the shell move the proposal clear of other bars,
//! followed by a *commit* whose result is authoritative.
//!
//! [`ShellService`] is the raw OS protocol; [`DockClient`] is the
//! stateful wrapper the controller talks to. [`AppBarClient`] implements
//! the latter on top of any implementation of the former, so the
//! protocol rules are shared by every platform and by the tests.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::error::{HoleError, HoleResult};
use crate::event::RepositionRequested;
use crate::geometry::clamp_to_edge;
use crate::{Edge, Rect};

/// Name used to allocate the callback message identity.
///
/// The identity space is shared system-wide, so the name must be
/// specific to this application.
pub const CALLBACK_MESSAGE_NAME: &str = "DesktopHolesAppBarMessage";

/// Identity of a live reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// OS identity of the reservation-owning window.
    pub window: usize,
    /// Message the shell uses to notify the window.
    pub callback_message: u32,
}

/// Sending half of the reposition stream, handed to the platform layer
/// so it can forward shell callbacks.
#[derive(Debug, Clone)]
pub struct RepositionNotifier {
    tx: Sender<RepositionRequested>,
}

impl RepositionNotifier {
    /// Creates a notifier and the single receiver that consumes it.
    pub fn channel() -> (Self, Receiver<RepositionRequested>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    /// Queues a reposition request for the controller.
    pub fn notify(&self) {
        let _ = self.tx.send(RepositionRequested);
    }
}

/// The OS services consumed by the docking engine.
pub trait ShellService {
    /// OS identity of the window that will own the reservation.
    fn window(&self) -> usize;

    /// Allocates a process-independent message identity for `name`.
    fn register_message_name(&mut self, name: &str) -> HoleResult<u32>;

    /// Adds the window to the shell's bar registry. Shell callbacks for
    /// `callback_message` must be forwarded to `notifier`.
    fn register(&mut self, callback_message: u32, notifier: RepositionNotifier) -> HoleResult<()>;

    /// Asks the shell to adjust `proposed` so it avoids other bars.
    fn query_position(&mut self, edge: Edge, proposed: Rect) -> HoleResult<Rect>;

    /// Commits the final rectangle. The result is authoritative.
    fn commit_position(&mut self, edge: Edge, rect: Rect) -> HoleResult<Rect>;

    /// Removes the window from the bar registry.
    fn unregister(&mut self) -> HoleResult<()>;
}

/// Lifecycle of the single reservation: register, negotiate, unregister.
pub trait DockClient {
    /// Registers with the shell. Idempotent: returns the existing
    /// registration when already registered.
    fn register(&mut self) -> HoleResult<Registration>;

    /// Runs one query/commit round and returns the committed rectangle.
    ///
    /// `thickness` is re-applied to the query result before committing.
    fn negotiate(&mut self, desired: Rect, edge: Edge, thickness: i32) -> HoleResult<Rect>;

    /// Releases the reservation. A no-op when not registered.
    fn unregister(&mut self) -> HoleResult<()>;

    /// The live registration, if any.
    fn registration(&self) -> Option<Registration>;

    fn is_registered(&self) -> bool {
        self.registration().is_some()
    }

    /// Hands out the reposition stream. Only the first call returns it.
    fn take_reposition_events(&mut self) -> Option<Receiver<RepositionRequested>>;
}

/// [`DockClient`] implementation driving a [`ShellService`].
pub struct AppBarClient<S: ShellService> {
    shell: S,
    registration: Option<Registration>,
    callback_message: Option<u32>,
    notifier: RepositionNotifier,
    events: Option<Receiver<RepositionRequested>>,
}

impl<S: ShellService> AppBarClient<S> {
    pub fn new(shell: S) -> Self {
        let (notifier, events) = RepositionNotifier::channel();
        Self {
            shell,
            registration: None,
            callback_message: None,
            notifier,
            events: Some(events),
        }
    }

    /// Returns the cached callback identity, allocating it on first use.
    fn callback_message(&mut self) -> HoleResult<u32> {
        if let Some(id) = self.callback_message {
            return Ok(id);
        }
        let id = self
            .shell
            .register_message_name(CALLBACK_MESSAGE_NAME)
            .map_err(|e| HoleError::RegistrationDenied(e.to_string()))?;
        self.callback_message = Some(id);
        Ok(id)
    }
}

impl<S: ShellService> DockClient for AppBarClient<S> {
    fn register(&mut self) -> HoleResult<Registration> {
        if let Some(registration) = self.registration {
            return Ok(registration);
        }

        let callback_message = self.callback_message()?;
        self.shell
            .register(callback_message, self.notifier.clone())
            .map_err(|e| match e {
                HoleError::RegistrationDenied(_) => e,
                other => HoleError::RegistrationDenied(other.to_string()),
            })?;

        let registration = Registration {
            window: self.shell.window(),
            callback_message,
        };
        crate::log_info!(
            "Registered reservation window 0x{:X} (callback message 0x{:X})",
            registration.window,
            callback_message
        );
        self.registration = Some(registration);
        Ok(registration)
    }

    fn negotiate(&mut self, desired: Rect, edge: Edge, thickness: i32) -> HoleResult<Rect> {
        if self.registration.is_none() {
            return Err(HoleError::NotRegistered);
        }

        let adjusted = self.shell.query_position(edge, desired)?;
        let proposed = clamp_to_edge(adjusted, edge, thickness);
        let committed = self.shell.commit_position(edge, proposed)?;

        crate::log_debug!(
            "Negotiated {edge} strip: desired {desired}, queried {adjusted}, committed {committed}"
        );
        Ok(committed)
    }

    fn unregister(&mut self) -> HoleResult<()> {
        if self.registration.take().is_none() {
            return Ok(());
        }
        let result = self.shell.unregister();
        match &result {
            Ok(()) => crate::log_info!("Released reservation"),
            Err(e) => crate::log_warn!("Releasing reservation failed: {e}"),
        }
        result
    }

    fn registration(&self) -> Option<Registration> {
        self.registration
    }

    fn take_reposition_events(&mut self) -> Option<Receiver<RepositionRequested>> {
        self.events.take()
    }
}

#[cfg(test)]
#[path = "dock_tests.rs"]
mod tests;
