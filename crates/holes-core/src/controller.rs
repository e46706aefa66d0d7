//! The reserved-strip controller.
//!
//! Owns the single hole: its [`DockSpec`], the shell registration (via a
//! [`DockClient`]) and the strip window. Every change to the window's
//! bounds goes through a negotiation round here.
//!
//! # State machine
//!
//! ```text
//!            resize begin              negotiate
//!   Idle ──────────────────▶ UserResizing     Idle ─────────▶ Negotiating
//!    ▲                           │             ▲                  │
//!    └──── resize end (resync) ──┘             └──── round done ──┘
//! ```
//!
//! Reposition requests are only acted on in `Idle`. Requests that arrive
//! while `UserResizing` are dropped; the gesture end renegotiates anyway.
//! Requests raised while `Negotiating` are side effects of the round
//! itself and are drained and dropped before returning to `Idle`.

use std::sync::mpsc::Receiver;

use crate::config::DockingConfig;
use crate::dock::DockClient;
use crate::error::{HoleError, HoleResult};
use crate::event::{RepositionRequested, StripEvent};
use crate::geometry::{self, DockSpec};
use crate::window::{MonitorSource, StripWindow};
use crate::Rect;

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripState {
    /// No negotiation or gesture in progress.
    Idle,
    /// A query/commit round is running.
    Negotiating,
    /// The user is dragging a border of the strip.
    UserResizing,
}

/// Whether the hole survives an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleStatus {
    Active,
    Closed,
}

/// Orchestrates resolution, registration and negotiation for one strip.
pub struct StripController<C: DockClient, W: StripWindow, M: MonitorSource> {
    client: C,
    window: W,
    monitors: M,
    policy: DockingConfig,
    state: StripState,
    spec: Option<DockSpec>,
    committed: Option<Rect>,
    reposition_events: Option<Receiver<RepositionRequested>>,
}

impl<C: DockClient, W: StripWindow, M: MonitorSource> StripController<C, W, M> {
    pub fn new(mut client: C, window: W, monitors: M, policy: DockingConfig) -> Self {
        let reposition_events = client.take_reposition_events();
        Self {
            client,
            window,
            monitors,
            policy,
            state: StripState::Idle,
            spec: None,
            committed: None,
            reposition_events,
        }
    }

    pub fn state(&self) -> StripState {
        self.state
    }

    pub fn dock_spec(&self) -> Option<&DockSpec> {
        self.spec.as_ref()
    }

    /// Window bounds last confirmed by the shell.
    pub fn committed_rect(&self) -> Option<Rect> {
        self.committed
    }

    pub fn is_registered(&self) -> bool {
        self.client.is_registered()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    /// Turns `selection` into a reserved strip.
    ///
    /// On rejection nothing changes. Otherwise the controller registers
    /// (if needed), negotiates the new placement and moves the window to
    /// the committed rectangle, which is returned. If negotiation fails
    /// the previous hole, if any, stays in place. If only moving the
    /// window fails, the shell already holds the new placement, so the
    /// new hole is kept and the error returned.
    pub fn try_set_hole(&mut self, selection: Rect) -> HoleResult<Rect> {
        geometry::check_selection(&selection)?;

        let monitors = self
            .monitors
            .enumerate_monitors()
            .map_err(|e| HoleError::Monitors(e.to_string()))?;

        let spec = match geometry::resolve(selection, &monitors, &self.policy) {
            Ok(spec) => spec,
            Err(rejection) => {
                crate::log_info!("Selection {selection} rejected: {rejection}");
                return Err(rejection.into());
            }
        };
        crate::log_info!(
            "Selection {selection} resolved to {} edge, {}px on monitor {}",
            spec.edge,
            spec.thickness,
            spec.monitor
        );

        self.client.register()?;

        // A new hole supersedes any gesture still open on the old one.
        self.state = StripState::Idle;
        let previous = self.spec.replace(spec);
        match self.reposition() {
            Ok(Some(committed)) => Ok(committed),
            Ok(None) => self.committed.ok_or(HoleError::NoHole),
            Err(e @ HoleError::Window(_)) => Err(e),
            Err(e) => {
                self.spec = previous;
                Err(e)
            }
        }
    }

    /// Opens a manual resize gesture.
    pub fn on_user_resize_begin(&mut self) {
        if self.spec.is_none() {
            return;
        }
        crate::log_debug!("Resize gesture started");
        self.state = StripState::UserResizing;
    }

    /// Closes a manual resize gesture: re-reads the thickness from the
    /// window and runs one negotiation round.
    pub fn on_user_resize_end(&mut self) -> HoleResult<()> {
        if self.state != StripState::UserResizing {
            return Ok(());
        }
        self.state = StripState::Idle;

        let bounds = self
            .window
            .rect()
            .map_err(|e| HoleError::Window(e.to_string()))?;
        let min_thickness = self.policy.min_thickness;
        let Some(spec) = self.spec.as_mut() else {
            return Ok(());
        };
        spec.resync_thickness(&bounds, min_thickness);
        crate::log_debug!("Resize gesture ended, thickness now {}px", spec.thickness);

        self.reposition().map(|_| ())
    }

    /// Renegotiates with the last dock spec, unless a gesture or another
    /// round is in progress.
    pub fn on_reposition_requested(&mut self) -> HoleResult<()> {
        match self.state {
            StripState::Idle => {}
            StripState::UserResizing => {
                crate::log_debug!("Reposition request dropped during resize gesture");
                return Ok(());
            }
            StripState::Negotiating => {
                crate::log_debug!("Re-entrant reposition request masked");
                return Ok(());
            }
        }
        if self.spec.is_none() || !self.client.is_registered() {
            return Ok(());
        }
        self.reposition().map(|_| ())
    }

    /// Handles every reposition request queued by the shell, in order.
    ///
    /// Returns how many were received.
    pub fn pump_reposition_events(&mut self) -> usize {
        let mut received = 0;
        while self.next_reposition_event().is_some() {
            received += 1;
            if let Err(e) = self.on_reposition_requested() {
                crate::log_warn!("Reposition failed: {e}");
            }
        }
        received
    }

    /// Dispatches a window event.
    pub fn handle_event(&mut self, event: StripEvent) -> HoleStatus {
        match event {
            StripEvent::ResizeBegin => self.on_user_resize_begin(),
            StripEvent::ResizeEnd => {
                if let Err(e) = self.on_user_resize_end() {
                    crate::log_warn!("Resync after resize failed: {e}");
                }
            }
            StripEvent::Closed => {
                self.dispose();
                return HoleStatus::Closed;
            }
        }
        HoleStatus::Active
    }

    /// Releases the shell reservation and forgets the hole.
    ///
    /// Safe to call any number of times.
    pub fn dispose(&mut self) {
        if self.spec.is_some() {
            self.window.hide();
        }
        if let Err(e) = self.client.unregister() {
            crate::log_warn!("Unregister failed: {e}");
        }
        self.spec = None;
        self.committed = None;
        self.state = StripState::Idle;
    }

    /// Runs one guarded negotiation round.
    ///
    /// Returns `Ok(None)` when masked by a round already in progress.
    fn reposition(&mut self) -> HoleResult<Option<Rect>> {
        if self.state != StripState::Idle {
            return Ok(None);
        }
        let spec = self.spec.ok_or(HoleError::NoHole)?;

        self.state = StripState::Negotiating;
        let result = self.negotiate_and_apply(&spec);
        let masked = self.drain_reposition_events();
        self.state = StripState::Idle;

        if masked > 0 {
            crate::log_debug!("Masked {masked} reposition request(s) raised by our own round");
        }
        result.map(Some)
    }

    fn negotiate_and_apply(&mut self, spec: &DockSpec) -> HoleResult<Rect> {
        let committed = self
            .client
            .negotiate(spec.desired_rect(), spec.edge, spec.thickness)?;
        self.committed = Some(committed);
        self.window
            .set_rect(&committed)
            .map_err(|e| HoleError::Window(e.to_string()))?;
        Ok(committed)
    }

    fn next_reposition_event(&self) -> Option<RepositionRequested> {
        self.reposition_events.as_ref()?.try_recv().ok()
    }

    fn drain_reposition_events(&self) -> usize {
        self.reposition_events
            .as_ref()
            .map_or(0, |rx| rx.try_iter().count())
    }
}

impl<C: DockClient, W: StripWindow, M: MonitorSource> Drop for StripController<C, W, M> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
