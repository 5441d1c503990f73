//! Shortest-solution search: breadth-first over the implicit state graph.
//!
//! Purpose
//! - Given a [`GraphModel`](crate::graph::GraphModel), an initial and a
//!   goal vector, find the shortest press sequence transforming one into
//!   the other, or establish that none exists.
//!
//! Why this design
//! - BFS with enqueue-time deduplication is exact here: the state space is
//!   finite (`modulus^node_count` vectors) and every move has unit cost,
//!   so the first dequeue of the goal carries a minimum-length solution.
//! - Ascending node-index expansion plus FIFO order makes the result the
//!   lexicographically earliest shortest solution, hence deterministic.
//! - An optional expansion cap bounds worst-case exponential blow-up; a
//!   capped stop is reported as [`Outcome::Aborted`], which is
//!   inconclusive and distinct from the proof [`Outcome::Unreachable`].

mod bfs;
mod types;

pub use bfs::solve;
pub use types::{Outcome, Solution, SolverCfg};
