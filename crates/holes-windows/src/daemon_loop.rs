use std::sync::mpsc::{self, Receiver};
use std::thread;

use holes_core::WindowResult;
use holes_core::config;
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, MSG, TranslateMessage, WM_HOTKEY,
};

use crate::hotkey::HotkeyManager;

use super::daemon_ipc;
use super::daemon_loop_handlers;
use super::daemon_session::HoleSession;
use super::daemon_types::{Flow, Request, WM_WAKE};

/// The inner daemon loop, separated so cleanup always runs in `run()`.
pub(super) fn daemon_loop() -> WindowResult<()> {
    let config = config::load();
    holes_core::log::init(&config.logging);
    let keybindings = config::load_keybindings();

    holes_core::log_info!("Daemon started (PID: {})", std::process::id());
    holes_core::log_info!(
        "Config: snap_threshold={}, min_thickness={}, log_level={}",
        config.docking.snap_threshold,
        config.docking.min_thickness,
        config.logging.level
    );

    // SAFETY: returns the id of the calling thread.
    let ui_thread = unsafe { GetCurrentThreadId() };
    let (tx, rx) = mpsc::channel::<Request>();
    thread::spawn(move || daemon_ipc::ipc_loop(tx, ui_thread));

    let mut hotkeys = HotkeyManager::default();
    hotkeys.register_all(&keybindings);

    let mut session = HoleSession::new(config.docking);
    run_message_pump(&hotkeys, &rx, &mut session);

    // Release the reservation before the hotkeys and the process go away.
    session.remove_hole();
    holes_core::log_info!("Daemon stopped");
    Ok(())
}

/// Runs the UI thread's message pump until a stop request or `WM_QUIT`.
///
/// After every message, queued CLI requests are answered and the
/// session drains its window events and shell notifications.
fn run_message_pump(
    hotkeys: &HotkeyManager,
    requests: &Receiver<Request>,
    session: &mut HoleSession,
) {
    let mut msg = MSG::default();

    // SAFETY: standard GetMessage/Dispatch loop on the owning thread.
    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        let mut flow = Flow::Continue;

        match msg.message {
            WM_HOTKEY => {
                if let Some(action) = hotkeys.action_for(msg.wParam.0 as i32) {
                    holes_core::log_info!("Hotkey triggered {action:?}");
                    flow = daemon_loop_handlers::handle_action(action, session).1;
                }
            }
            WM_WAKE => {}
            // SAFETY: `msg` was just filled in by GetMessageW on this thread.
            _ => unsafe {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            },
        }

        for Request { command, reply } in requests.try_iter() {
            let (response, next) = daemon_loop_handlers::handle_command(command, session);
            let _ = reply.send(response);
            if next == Flow::Stop {
                flow = Flow::Stop;
            }
        }

        session.pump();

        if flow == Flow::Stop {
            break;
        }
    }
}
