/// A platform-agnostic event from the strip window.
///
/// Platform crates translate raw window messages into these variants
/// and feed them to the controller on the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripEvent {
    /// The user started dragging a border of the strip.
    ResizeBegin,
    /// The user released the border.
    ResizeEnd,
    /// The strip window was asked to close.
    Closed,
}

/// Marker for a shell request to re-run position negotiation.
///
/// Sent when another docked bar appears, moves or goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositionRequested;
