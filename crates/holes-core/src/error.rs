use crate::geometry::Rejection;

/// Result alias for docking operations.
pub type HoleResult<T> = Result<T, HoleError>;

/// Everything that can go wrong while reserving a strip.
///
/// None of these are fatal: the worst outcome is "no reservation".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoleError {
    /// The selection is not close enough to an edge, or too thin.
    Rejected(Rejection),
    /// The shell refused to register the reservation window.
    RegistrationDenied(String),
    /// A position query or commit failed; the previous placement stands.
    NegotiationFailed(String),
    /// A reservation call was made without a live registration.
    NotRegistered,
    /// There is no hole to operate on.
    NoHole,
    /// The monitor layout could not be queried.
    Monitors(String),
    /// Reading or setting the strip window's bounds failed.
    Window(String),
}

impl HoleError {
    /// Text suitable for showing to the end user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(r @ (Rejection::TooSmall { .. } | Rejection::OutOfRange)) => {
                format!("Invalid selection: {r}.")
            }
            Self::Rejected(_) => "To crop the desktop, select a strip that is right next to \
                                  one edge of the monitor."
                .to_string(),
            Self::RegistrationDenied(_) => {
                "The desktop shell refused to reserve screen space.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for HoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(r) => write!(f, "selection rejected: {r}"),
            Self::RegistrationDenied(e) => write!(f, "registration denied: {e}"),
            Self::NegotiationFailed(e) => write!(f, "position negotiation failed: {e}"),
            Self::NotRegistered => write!(f, "no live reservation"),
            Self::NoHole => write!(f, "no hole is set"),
            Self::Monitors(e) => write!(f, "monitor enumeration failed: {e}"),
            Self::Window(e) => write!(f, "strip window error: {e}"),
        }
    }
}

impl std::error::Error for HoleError {}

impl From<Rejection> for HoleError {
    fn from(r: Rejection) -> Self {
        Self::Rejected(r)
    }
}
