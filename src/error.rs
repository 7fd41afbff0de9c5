use thiserror::Error;

/// Top-level error type for grid offset operations.
#[derive(Debug, Error)]
pub enum GridOffsetError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Interaction(#[from] InteractionError),

    #[error(transparent)]
    Host(#[from] HostError),
}

impl GridOffsetError {
    /// Returns `true` if the user backed out rather than something failing.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Interaction(InteractionError::Cancelled | InteractionError::NoConfirmation)
        )
    }
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("arc endpoint lies {distance} from the center, expected radius {radius}")]
    NotCircular { radius: f64, distance: f64 },
}

/// Errors raised by the interactive layer.
#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("operation cancelled by the user")]
    Cancelled,

    #[error("invalid distance override: {0:?}")]
    InvalidOverride(String),

    #[error("offset was not confirmed")]
    NoConfirmation,
}

/// Errors reported by the host document.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("grid not found: {0}")]
    GridNotFound(String),

    #[error("host rejected the request: {0}")]
    Rejected(String),
}

/// Convenience type alias for results using [`GridOffsetError`].
pub type Result<T> = std::result::Result<T, GridOffsetError>;
