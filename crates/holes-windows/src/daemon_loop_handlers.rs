use holes_core::{Action, geometry};
use holes_core::ipc::{Command, Response};

use super::daemon_session::HoleSession;
use super::daemon_types::Flow;

pub(super) fn handle_command(command: Command, session: &mut HoleSession) -> (Response, Flow) {
    match command {
        Command::SetHole { rect } => {
            holes_core::log_info!("SetHole {rect} requested");
            if let Err(rejection) = geometry::check_selection(&rect) {
                return (Response::error(format!("Invalid selection: {rejection}")), Flow::Continue);
            }
            (session.set_hole(rect), Flow::Continue)
        }
        Command::RemoveHole => (session.remove_hole(), Flow::Continue),
        Command::Status => (session.status(), Flow::Continue),
        Command::Stop => handle_action(&Action::Stop, session),
        Command::Action { action } => handle_action(&action, session),
    }
}

pub(super) fn handle_action(action: &Action, session: &mut HoleSession) -> (Response, Flow) {
    match action {
        Action::RemoveHole => (session.remove_hole(), Flow::Continue),
        Action::Stop => {
            holes_core::log_info!("Stop requested, shutting down");
            (Response::ok_with_message("Daemon stopping"), Flow::Stop)
        }
    }
}
