use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

/// Declares this process as per-monitor DPI aware (V2).
///
/// Monitor bounds and window rectangles are then reported in physical
/// pixels on every monitor, which is what the shell's bar registry uses.
/// Must run before the mask window is created.
pub fn enable_dpi_awareness() {
    // SAFETY: called once at daemon startup. Failure means awareness was
    // already set (e.g. via manifest) and is ignored.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}
