use std::sync::mpsc::{self, Receiver, Sender};

use holes_core::ipc::Response;
use holes_core::{
    AppBarClient, DockingConfig, HoleStatus, Rect, StripController, StripEvent, StripWindow,
    WindowResult,
};

use crate::appbar::Win32Shell;
use crate::mask::MaskWindow;
use crate::monitor::Win32Monitors;

type Controller = StripController<AppBarClient<Win32Shell>, MaskWindow, Win32Monitors>;

/// The daemon's single hole: a mask window plus the controller that
/// keeps it docked. Absent until the first accepted selection.
pub(super) struct HoleSession {
    controller: Option<Controller>,
    policy: DockingConfig,
    events_tx: Sender<StripEvent>,
    events_rx: Receiver<StripEvent>,
}

impl HoleSession {
    pub fn new(policy: DockingConfig) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            controller: None,
            policy,
            events_tx,
            events_rx,
        }
    }

    /// Reserves a strip for `selection`.
    ///
    /// Without a live hole the mask window is created up front and
    /// closed again if the selection is refused. With one, a refused
    /// selection leaves the current hole untouched.
    pub fn set_hole(&mut self, selection: Rect) -> Response {
        let created = self.controller.is_none();
        let mut controller = match self.controller.take() {
            Some(controller) => controller,
            None => match self.open() {
                Ok(controller) => controller,
                Err(e) => {
                    holes_core::log_error!("Could not create the mask window: {e}");
                    return Response::error(format!("could not create the mask window: {e}"));
                }
            },
        };

        match controller.try_set_hole(selection) {
            Ok(committed) => {
                controller.window().show();
                let message = match controller.dock_spec() {
                    Some(spec) => format!("Hole reserved on the {} edge at {committed}", spec.edge),
                    None => format!("Hole reserved at {committed}"),
                };
                self.controller = Some(controller);
                Response::ok_with_message(message)
            }
            Err(e) => {
                holes_core::log_info!("Hole not set: {e}");
                if !created {
                    self.controller = Some(controller);
                }
                Response::error(e.user_message())
            }
        }
    }

    /// Releases the reservation and closes the mask window.
    pub fn remove_hole(&mut self) -> Response {
        match self.controller.take() {
            Some(controller) => {
                drop(controller);
                holes_core::log_info!("Hole removed");
                Response::ok_with_message("Hole removed")
            }
            None => Response::ok_with_message("No hole is set"),
        }
    }

    pub fn status(&self) -> Response {
        let hole = self.controller.as_ref().and_then(|c| {
            let spec = c.dock_spec()?;
            let committed = c.committed_rect()?;
            Some(format!(
                "hole on the {} edge, {}px thick at {committed}",
                spec.edge, spec.thickness
            ))
        });
        Response::ok_with_message(format!(
            "Desktop Holes is running, {}",
            hole.unwrap_or_else(|| "no hole set".to_string())
        ))
    }

    /// Feeds queued window events and shell notifications to the
    /// controller. Called after every message the pump dispatches.
    pub fn pump(&mut self) {
        let events: Vec<StripEvent> = self.events_rx.try_iter().collect();
        let Some(controller) = self.controller.as_mut() else {
            return;
        };

        for event in events {
            if controller.handle_event(event) == HoleStatus::Closed {
                holes_core::log_info!("Mask window closed, hole released");
                self.controller = None;
                return;
            }
        }
        controller.pump_reposition_events();
    }

    fn open(&self) -> WindowResult<Controller> {
        let window = MaskWindow::create(self.events_tx.clone())?;
        let client = AppBarClient::new(Win32Shell::new(&window));
        Ok(StripController::new(client, window, Win32Monitors, self.policy))
    }
}
