//! Breadth-first search with structural state deduplication.

use std::collections::{HashSet, VecDeque};

use crate::graph::{GraphModel, StateVector, VectorError};

use super::types::{Outcome, Solution, SolverCfg};

/// Find the shortest press sequence turning `initial` into `goal`.
///
/// Both vectors are validated against the model before any search; a
/// malformed vector is rejected without touching the frontier. The search
/// itself is synchronous and single-threaded, and owns all of its state,
/// so one `GraphModel` may back concurrent calls.
pub fn solve(
    model: &GraphModel,
    initial: &[u32],
    goal: &[u32],
    cfg: SolverCfg,
) -> Result<Outcome, VectorError> {
    model.check_vector(initial)?;
    model.check_vector(goal)?;
    Ok(BfsRunner::new(model, cfg).run(initial, goal))
}

/// BFS runner carrying the frontier and the visited set.
struct BfsRunner<'a> {
    model: &'a GraphModel,
    cfg: SolverCfg,
    frontier: VecDeque<(StateVector, Vec<usize>)>,
    visited: HashSet<StateVector>,
}

impl<'a> BfsRunner<'a> {
    fn new(model: &'a GraphModel, cfg: SolverCfg) -> Self {
        Self {
            model,
            cfg,
            frontier: VecDeque::new(),
            visited: HashSet::new(),
        }
    }

    fn run(mut self, initial: &[u32], goal: &[u32]) -> Outcome {
        self.frontier.push_back((initial.to_vec(), Vec::new()));
        self.visited.insert(initial.to_vec());

        let mut expanded = 0usize;
        while let Some((state, moves)) = self.frontier.pop_front() {
            // Goal test before expansion: initial may already equal goal,
            // in which case the empty sequence is the answer.
            if GraphModel::matches(&state, goal) {
                return Outcome::Solved(Solution { moves });
            }
            if let Some(cap) = self.cfg.max_expansions {
                if expanded >= cap {
                    return Outcome::Aborted { expanded };
                }
            }
            expanded += 1;
            // Ascending node index; combined with FIFO order this yields
            // the lexicographically earliest shortest solution.
            for node in 0..self.model.node_count() {
                let next = self.model.apply(&state, node);
                if self.visited.contains(&next) {
                    continue;
                }
                let mut next_moves = Vec::with_capacity(moves.len() + 1);
                next_moves.extend_from_slice(&moves);
                next_moves.push(node);
                self.visited.insert(next.clone());
                self.frontier.push_back((next, next_moves));
            }
        }
        // Frontier exhausted below the cap: the reachable set was fully
        // enumerated and the goal is not in it.
        Outcome::Unreachable
    }
}
