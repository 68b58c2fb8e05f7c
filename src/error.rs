use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for scenario construction and parameter validation.
///
/// The simulation core itself does not fail at runtime: degenerate geometry is
/// prevented by the spawn invariants and the contact resolution, and empty
/// statistics are reported as sentinel values rather than errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Random placement could not find a non-overlapping spot for a particle.
    #[error("placement failed: {0}")]
    Placement(String),
}
