//! Error types
//!
//! Only construction-time work can fail: laying out targets and loading
//! configuration. Everything that runs per tick is total.

/// Failures while building or resetting a puzzle
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PuzzleError {
    /// Spacing and movement-time constraints could not be met in time
    #[error(
        "could not place {requested} targets: best layout reached {placed} after {attempts} attempts"
    )]
    PlacementInfeasible {
        placed: usize,
        requested: usize,
        attempts: u64,
    },

    /// The placement area cannot contain even a single target
    #[error("bounds {width}x{height} cannot hold a target of radius {radius}")]
    InvalidBounds { width: u32, height: u32, radius: f32 },
}

/// Failures while reading or writing JSON configuration files
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Parse(#[from] serde_json::Error),
}
