//! Search configuration and result types.

/// Search configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolverCfg {
    /// Maximum number of dequeued states before the search gives up.
    /// `None` runs to frontier exhaustion, which on a finite state space
    /// always terminates; the cap exists because "finite" can still mean
    /// `modulus^node_count` states.
    pub max_expansions: Option<usize>,
}

impl SolverCfg {
    /// Cap the number of dequeued states.
    #[inline]
    pub fn capped(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }
}

/// A shortest press sequence, applied left to right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<usize>,
}

impl Solution {
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Search result.
///
/// `Unreachable` is a proof of non-existence (the reachable set was
/// exhausted); `Aborted` only says the cap was hit first. Callers that
/// want certainty retry with a larger cap or none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Solved(Solution),
    Unreachable,
    Aborted { expanded: usize },
}

impl Outcome {
    /// The solution, if one was found.
    #[inline]
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(s) => Some(s),
            _ => None,
        }
    }
}
