use crate::Rect;

/// A boxed error type for platform window operations.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// The on-screen window that covers the reserved strip.
///
/// The controller is the only writer of its bounds. Each platform crate
/// (e.g. `holes-windows`) provides its own implementation.
pub trait StripWindow {
    /// Returns the window's current bounds in virtual-screen coordinates.
    fn rect(&self) -> WindowResult<Rect>;

    /// Moves and resizes the window.
    fn set_rect(&mut self, rect: &Rect) -> WindowResult<()>;

    fn show(&self);

    /// Hides the window. Called before the reservation is released.
    fn hide(&self);
}

/// Source of the monitor layout.
///
/// Queried fresh for every resolution; results are never cached.
pub trait MonitorSource {
    /// Returns the full bounds of every monitor, in enumeration order.
    fn enumerate_monitors(&self) -> WindowResult<Vec<Rect>>;
}

/// A fixed layout, used for dry runs and tests.
impl MonitorSource for Vec<Rect> {
    fn enumerate_monitors(&self) -> WindowResult<Vec<Rect>> {
        Ok(self.clone())
    }
}
