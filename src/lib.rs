//! A simulated-annealing placement engine: lays vertices (compute tasks)
//! onto a rectangular grid of chips connected by a mesh or torus topology,
//! minimising the weighted sum of per-net bounding-box wire lengths subject
//! to per-chip multi-dimensional resource capacity constraints.
//!
//! This crate is the placement core only: state representation, the
//! incremental cost model, move generation, and the resource accounting
//! that makes arbitrary swaps safe on a capacity-constrained grid. Problem
//! loading, CLI orchestration, temperature schedules, convergence
//! detection and parallel scheduling of independent runs are all left to
//! an outer caller driving [`State::step`]/[`State::run_steps`].

pub mod config;
pub mod cost;
pub mod error;
pub mod graph;
pub mod moves;
pub mod resource;
pub mod state;

pub use config::Config;
pub use error::PlacementError;
pub use graph::{Net, NetId, Vertex, VertexId};
pub use state::{BatchStats, State, StepOutcome};
