use std::mem;

use holes_core::{MonitorSource, Rect, WindowResult};
use windows::Win32::Foundation::{LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO};
use windows::core::BOOL;

/// The live monitor layout, queried through `EnumDisplayMonitors`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Monitors;

impl MonitorSource for Win32Monitors {
    fn enumerate_monitors(&self) -> WindowResult<Vec<Rect>> {
        enumerate_monitors()
    }
}

/// Returns the full bounds (`rcMonitor`, not the work area) of every
/// monitor, in enumeration order.
pub fn enumerate_monitors() -> WindowResult<Vec<Rect>> {
    let mut monitors: Vec<Rect> = Vec::new();

    // SAFETY: the callback only runs during this call, so the pointer to
    // `monitors` passed through LPARAM stays valid for its whole lifetime.
    let ok = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(enum_monitor_proc),
            LPARAM(&mut monitors as *mut Vec<Rect> as isize),
        )
    };

    if !ok.as_bool() {
        return Err("EnumDisplayMonitors failed".into());
    }
    Ok(monitors)
}

unsafe extern "system" fn enum_monitor_proc(
    monitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    data: LPARAM,
) -> BOOL {
    // SAFETY: `data` is the `&mut Vec<Rect>` passed by `enumerate_monitors`.
    let monitors = unsafe { &mut *(data.0 as *mut Vec<Rect>) };

    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: cbSize is set as GetMonitorInfoW requires.
    if unsafe { GetMonitorInfoW(monitor, &mut info) }.as_bool() {
        let rc = info.rcMonitor;
        monitors.push(Rect::from_ltrb(rc.left, rc.top, rc.right, rc.bottom));
    }

    BOOL(1)
}
