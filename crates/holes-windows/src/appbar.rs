//! The shell's docked-bar registry, reached through `SHAppBarMessage`.

use std::mem;

use holes_core::dock::{RepositionNotifier, ShellService};
use holes_core::{Edge, HoleError, HoleResult, Rect};
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::Shell::{
    ABE_BOTTOM, ABE_LEFT, ABE_RIGHT, ABE_TOP, ABM_NEW, ABM_QUERYPOS, ABM_REMOVE, ABM_SETPOS,
    APPBARDATA, SHAppBarMessage,
};
use windows::Win32::UI::WindowsAndMessaging::RegisterWindowMessageW;
use windows::core::HSTRING;

use crate::mask::{self, MaskWindow};

/// [`ShellService`] for one mask window.
pub struct Win32Shell {
    hwnd: HWND,
}

impl Win32Shell {
    pub fn new(window: &MaskWindow) -> Self {
        Self {
            hwnd: window.hwnd(),
        }
    }

    fn data(&self) -> APPBARDATA {
        APPBARDATA {
            cbSize: mem::size_of::<APPBARDATA>() as u32,
            hWnd: self.hwnd,
            ..Default::default()
        }
    }

    /// Sends `message` with the strip's edge and rectangle and returns the
    /// rectangle as the shell left it.
    fn position_message(&self, message: u32, edge: Edge, rect: Rect) -> Rect {
        let mut abd = APPBARDATA {
            uEdge: edge_code(edge),
            rc: to_win_rect(&rect),
            ..self.data()
        };
        // SAFETY: `abd` is fully initialised with cbSize set; the shell
        // writes the adjusted rectangle back into `abd.rc`.
        unsafe {
            SHAppBarMessage(message, &mut abd);
        }
        from_win_rect(&abd.rc)
    }
}

impl ShellService for Win32Shell {
    fn window(&self) -> usize {
        self.hwnd.0 as usize
    }

    fn register_message_name(&mut self, name: &str) -> HoleResult<u32> {
        // SAFETY: RegisterWindowMessageW only reads the string.
        let id = unsafe { RegisterWindowMessageW(&HSTRING::from(name)) };
        if id == 0 {
            return Err(HoleError::RegistrationDenied(format!(
                "RegisterWindowMessageW({name}) failed"
            )));
        }
        Ok(id)
    }

    fn register(&mut self, callback_message: u32, notifier: RepositionNotifier) -> HoleResult<()> {
        // The route must exist before ABM_NEW: the shell may call back
        // as soon as the bar is added.
        mask::route_appbar_callback(self.hwnd, callback_message, notifier);

        let mut abd = APPBARDATA {
            uCallbackMessage: callback_message,
            ..self.data()
        };
        // SAFETY: see `position_message`.
        let added = unsafe { SHAppBarMessage(ABM_NEW, &mut abd) };
        if added == 0 {
            mask::clear_appbar_callback(self.hwnd);
            return Err(HoleError::RegistrationDenied(
                "the shell refused ABM_NEW (window already registered?)".into(),
            ));
        }
        Ok(())
    }

    fn query_position(&mut self, edge: Edge, proposed: Rect) -> HoleResult<Rect> {
        Ok(self.position_message(ABM_QUERYPOS, edge, proposed))
    }

    fn commit_position(&mut self, edge: Edge, rect: Rect) -> HoleResult<Rect> {
        let committed = self.position_message(ABM_SETPOS, edge, rect);
        mask::route_docked_edge(self.hwnd, edge);
        if committed.width <= 0 || committed.height <= 0 {
            return Err(HoleError::NegotiationFailed(format!(
                "shell committed an empty rectangle {committed}"
            )));
        }
        Ok(committed)
    }

    fn unregister(&mut self) -> HoleResult<()> {
        let mut abd = self.data();
        // SAFETY: see `position_message`.
        unsafe {
            SHAppBarMessage(ABM_REMOVE, &mut abd);
        }
        mask::clear_appbar_callback(self.hwnd);
        Ok(())
    }
}

/// Shell code for a screen edge.
fn edge_code(edge: Edge) -> u32 {
    match edge {
        Edge::Left => ABE_LEFT,
        Edge::Top => ABE_TOP,
        Edge::Right => ABE_RIGHT,
        Edge::Bottom => ABE_BOTTOM,
    }
}

pub(crate) fn to_win_rect(rect: &Rect) -> RECT {
    RECT {
        left: rect.left(),
        top: rect.top(),
        right: rect.right(),
        bottom: rect.bottom(),
    }
}

pub(crate) fn from_win_rect(rc: &RECT) -> Rect {
    Rect::from_ltrb(rc.left, rc.top, rc.right, rc.bottom)
}
