//! The black, top-most window that covers the reserved strip.
//!
//! The window procedure never touches the controller. It translates the
//! few messages the docking engine cares about into [`StripEvent`]s and
//! reposition requests, which the daemon drains after each dispatched
//! message.

use std::cell::RefCell;
use std::sync::Once;
use std::sync::mpsc::Sender;

use holes_core::dock::RepositionNotifier;
use holes_core::geometry::depth_of;
use holes_core::{Edge, Rect, StripEvent, StripWindow, WindowResult};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{BLACK_BRUSH, GetStockObject, HBRUSH};
use windows::Win32::UI::Shell::ABN_POSCHANGED;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, GetWindowRect, HTBOTTOM, HTCLIENT, HTLEFT,
    HTRIGHT, HTTOP, HWND_TOPMOST, IDC_ARROW, LoadCursorW, RegisterClassW,
    SW_HIDE, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SWP_SHOWWINDOW, SetWindowPos, ShowWindow,
    WM_CLOSE, WM_ENTERSIZEMOVE, WM_EXITSIZEMOVE, WM_NCCALCSIZE, WM_NCHITTEST, WNDCLASSW,
    WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_POPUP, WS_THICKFRAME,
};
use windows::core::{PCWSTR, w};

use crate::appbar::from_win_rect;

const CLASS_NAME: PCWSTR = w!("DesktopHolesMask");

/// Width of the invisible resize handle on the strip's inner side.
const RESIZE_GRIP: i32 = 8;

static REGISTER_CLASS: Once = Once::new();

/// Where the window procedure forwards messages for one mask window.
struct Route {
    hwnd: isize,
    events: Sender<StripEvent>,
    appbar: Option<(u32, RepositionNotifier)>,
    edge: Option<Edge>,
}

// Windows are owned by the UI thread, so their routes are too.
thread_local! {
    static ROUTES: RefCell<Vec<Route>> = const { RefCell::new(Vec::new()) };
}

/// The strip window. Destroyed on drop.
pub struct MaskWindow {
    hwnd: HWND,
}

impl MaskWindow {
    /// Creates a hidden mask window on the calling thread.
    ///
    /// Resize gestures and close requests are reported on `events`.
    pub fn create(events: Sender<StripEvent>) -> WindowResult<Self> {
        ensure_class_registered();

        // SAFETY: the class is registered above; all pointers are static.
        let hwnd = unsafe {
            CreateWindowExW(
                WS_EX_TOOLWINDOW | WS_EX_TOPMOST,
                CLASS_NAME,
                w!("Desktop Holes"),
                WS_POPUP | WS_THICKFRAME,
                0,
                0,
                0,
                0,
                None,
                None,
                None,
                None,
            )?
        };

        ROUTES.with(|routes| {
            routes.borrow_mut().push(Route {
                hwnd: key(hwnd),
                events,
                appbar: None,
                edge: None,
            });
        });
        holes_core::log_debug!("Created mask window 0x{:X}", key(hwnd));
        Ok(Self { hwnd })
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }
}

impl StripWindow for MaskWindow {
    fn rect(&self) -> WindowResult<Rect> {
        let mut rc = RECT::default();
        // SAFETY: `rc` is a valid out-parameter.
        unsafe { GetWindowRect(self.hwnd, &mut rc)? };
        Ok(from_win_rect(&rc))
    }

    fn set_rect(&mut self, rect: &Rect) -> WindowResult<()> {
        // SAFETY: plain repositioning of a window we own.
        unsafe {
            SetWindowPos(
                self.hwnd,
                Some(HWND_TOPMOST),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_NOACTIVATE,
            )?;
        }
        Ok(())
    }

    fn show(&self) {
        // SAFETY: see `set_rect`.
        unsafe {
            let _ = SetWindowPos(
                self.hwnd,
                Some(HWND_TOPMOST),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE | SWP_SHOWWINDOW,
            );
        }
    }

    fn hide(&self) {
        // SAFETY: see `set_rect`.
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_HIDE);
        }
    }
}

impl Drop for MaskWindow {
    fn drop(&mut self) {
        let hwnd = key(self.hwnd);
        ROUTES.with(|routes| routes.borrow_mut().retain(|r| r.hwnd != hwnd));
        // SAFETY: the window is owned by this struct and destroyed once.
        unsafe {
            let _ = DestroyWindow(self.hwnd);
        }
        holes_core::log_debug!("Destroyed mask window 0x{hwnd:X}");
    }
}

/// Forwards the shell's `callback_message` for `hwnd` to `notifier`.
pub(crate) fn route_appbar_callback(
    hwnd: HWND,
    callback_message: u32,
    notifier: RepositionNotifier,
) {
    with_route(key(hwnd), |route| {
        route.appbar = Some((callback_message, notifier));
    });
}

pub(crate) fn clear_appbar_callback(hwnd: HWND) {
    with_route(key(hwnd), |route| {
        route.appbar = None;
        route.edge = None;
    });
}

/// Records the edge `hwnd` is docked to, which decides its resize grip.
pub(crate) fn route_docked_edge(hwnd: HWND, edge: Edge) {
    with_route(key(hwnd), |route| route.edge = Some(edge));
}

fn with_route<T>(hwnd: isize, f: impl FnOnce(&mut Route) -> T) -> Option<T> {
    ROUTES.with(|routes| {
        routes
            .borrow_mut()
            .iter_mut()
            .find(|r| r.hwnd == hwnd)
            .map(f)
    })
}

fn key(hwnd: HWND) -> isize {
    hwnd.0 as isize
}

fn ensure_class_registered() {
    REGISTER_CLASS.call_once(|| {
        // SAFETY: stock objects and system cursors need no cleanup.
        unsafe {
            let wc = WNDCLASSW {
                lpfnWndProc: Some(mask_wnd_proc),
                lpszClassName: CLASS_NAME,
                hbrBackground: HBRUSH(GetStockObject(BLACK_BRUSH).0),
                hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
                ..Default::default()
            };
            if RegisterClassW(&wc) == 0 {
                holes_core::log_error!("Failed to register the mask window class");
            }
        }
    });
}

unsafe extern "system" fn mask_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if let Some(result) = handle_message(hwnd, msg, wparam, lparam) {
        return result;
    }
    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}

/// Returns `Some` when the message is fully handled here.
fn handle_message(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> Option<LRESULT> {
    match msg {
        WM_ENTERSIZEMOVE => {
            send_event(hwnd, StripEvent::ResizeBegin);
            None
        }
        WM_EXITSIZEMOVE => {
            send_event(hwnd, StripEvent::ResizeEnd);
            None
        }
        // Closing goes through the controller, which releases the
        // reservation before the window is destroyed.
        WM_CLOSE => {
            send_event(hwnd, StripEvent::Closed);
            Some(LRESULT(0))
        }
        // Client area covers the whole window: no visible frame.
        WM_NCCALCSIZE if wparam.0 != 0 => Some(LRESULT(0)),
        WM_NCHITTEST => {
            let edge = with_route(key(hwnd), |route| route.edge).flatten();
            let mut rc = RECT::default();
            // SAFETY: `rc` is a valid out-parameter.
            unsafe { GetWindowRect(hwnd, &mut rc) }.ok()?;
            let (x, y) = point_from_lparam(lparam);
            Some(LRESULT(grip_hit(edge, &from_win_rect(&rc), x, y) as isize))
        }
        _ => handle_appbar_callback(hwnd, msg, wparam),
    }
}

fn handle_appbar_callback(hwnd: HWND, msg: u32, wparam: WPARAM) -> Option<LRESULT> {
    with_route(key(hwnd), |route| match &route.appbar {
        Some((callback, notifier)) if *callback == msg => {
            if wparam.0 as u32 == ABN_POSCHANGED {
                notifier.notify();
            }
            Some(LRESULT(0))
        }
        _ => None,
    })
    .flatten()
}

fn send_event(hwnd: HWND, event: StripEvent) {
    with_route(key(hwnd), |route| {
        let _ = route.events.send(event);
    });
}

/// Decodes the signed screen coordinates packed into a hit-test LPARAM.
fn point_from_lparam(lparam: LPARAM) -> (i32, i32) {
    let x = (lparam.0 & 0xFFFF) as u16 as i16;
    let y = ((lparam.0 >> 16) & 0xFFFF) as u16 as i16;
    (i32::from(x), i32::from(y))
}

/// Hit-test code for a point over the strip.
///
/// Only the side facing away from the docked edge resizes, since that
/// is the side that changes the thickness. An undocked strip does not
/// resize at all.
fn grip_hit(edge: Option<Edge>, bounds: &Rect, x: i32, y: i32) -> u32 {
    let Some(edge) = edge else {
        return HTCLIENT;
    };
    let grip = RESIZE_GRIP.min(depth_of(edge, bounds) / 2).max(1);

    let on_grip = match edge {
        Edge::Left => x >= bounds.right() - grip,
        Edge::Right => x < bounds.left() + grip,
        Edge::Top => y >= bounds.bottom() - grip,
        Edge::Bottom => y < bounds.top() + grip,
    };
    if !on_grip {
        return HTCLIENT;
    }
    match edge {
        Edge::Left => HTRIGHT,
        Edge::Right => HTLEFT,
        Edge::Top => HTBOTTOM,
        Edge::Bottom => HTTOP,
    }
}
