//! Core model and search for mod-m increment puzzles on directed graphs.
//!
//! A puzzle is a small directed graph whose nodes each hold a value in
//! Z/mZ. Pressing a node adds 1 (mod m) to every node it points to; a node
//! only bumps itself if it carries an explicit self-loop. Given an initial
//! and a goal assignment, [`solver::solve`] finds the shortest press
//! sequence by breadth-first search over the reachable state vectors.
//!
//! The crate is deliberately pure: no I/O, no logging, no global state.
//! Hosts (the CLI, a UI) own serialization, self-loop policy, and retry
//! policy around the expansion cap.

pub mod graph;
pub mod randgen;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::graph::{ConfigError, Edge, GraphModel, VectorError};
    pub use crate::randgen::{PuzzleSample, RandomPuzzleGenerator, RandomPuzzleParams};
    pub use crate::solver::{solve, Outcome, Solution, SolverCfg};
}
