use std::error::Error;
use std::fmt;

/// Errors surfaced by the placement engine's construction and graph-building
/// API.
///
/// Infeasible moves are *not* represented here: a rejected or infeasible
/// `step` is an expected outcome of simulated annealing, reported as a plain
/// boolean, never as an error. These variants cover contract violations at
/// the boundary of the API instead (see the engine's §7 error-handling
/// design): bad dimensions at construction time, and table overflows that a
/// well-behaved loader should never trigger.
#[derive(Debug)]
pub enum PlacementError {
    DimensionMismatch(String),
    VertexTableFull(String),
    NetTableFull(String),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::DimensionMismatch(msg) => write!(f, "dimension mismatch: {}", msg),
            PlacementError::VertexTableFull(msg) => write!(f, "vertex table full: {}", msg),
            PlacementError::NetTableFull(msg) => write!(f, "net table full: {}", msg),
        }
    }
}

impl Error for PlacementError {}
