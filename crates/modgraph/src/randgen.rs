//! Reproducible random puzzle generation.
//!
//! Every sample carries a replay token (the per-sample seed), so a puzzle
//! seen in a bench run or a failing test can be rebuilt exactly. Goals are
//! produced by scrambling the initial vector with random presses, which
//! guarantees each sample is solvable within the scramble length.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::fmt;

use crate::graph::{Edge, GraphModel, StateVector};

/// Error type for puzzle generation.
#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Parameters for random solvable puzzles.
#[derive(Clone, Debug)]
pub struct RandomPuzzleParams {
    pub node_count: usize,
    pub modulus: u32,
    /// Random directed edges drawn on top of the (optional) self-loops.
    pub extra_edges: usize,
    /// Append one self-loop per node before the random edges.
    pub self_loops: bool,
    /// Presses applied to the initial vector to derive the goal.
    pub scramble_moves: usize,
}

impl RandomPuzzleParams {
    fn validate(&self) -> Result<(), GeneratorError> {
        if self.node_count == 0 {
            return Err(GeneratorError::invalid("need at least one node"));
        }
        if self.modulus < 2 {
            return Err(GeneratorError::invalid("modulus must be >= 2"));
        }
        Ok(())
    }
}

/// Replay token storing the seed that regenerates the same sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedReplay {
    pub seed: u64,
}

/// A generated puzzle plus its replay metadata.
#[derive(Clone, Debug)]
pub struct PuzzleSample {
    pub model: GraphModel,
    pub initial: StateVector,
    pub goal: StateVector,
    pub replay: SeedReplay,
}

/// Stream of reproducible random puzzles.
pub struct RandomPuzzleGenerator {
    params: RandomPuzzleParams,
    master_rng: StdRng,
}

impl RandomPuzzleGenerator {
    pub fn new(params: RandomPuzzleParams, seed: u64) -> Result<Self, GeneratorError> {
        params.validate()?;
        Ok(Self {
            params,
            master_rng: StdRng::seed_from_u64(seed),
        })
    }

    #[inline]
    pub fn params(&self) -> &RandomPuzzleParams {
        &self.params
    }

    /// One sample from an explicit seed; the basis of replay.
    pub fn generate_single(
        params: &RandomPuzzleParams,
        seed: u64,
    ) -> Result<PuzzleSample, GeneratorError> {
        params.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let n = params.node_count;

        let mut edges = if params.self_loops {
            Edge::self_loops(n)
        } else {
            Vec::new()
        };
        for _ in 0..params.extra_edges {
            edges.push(Edge::new(rng.gen_range(0..n), rng.gen_range(0..n)));
        }
        // endpoints are drawn in range, so construction cannot fail for
        // validated params; surface the error anyway rather than assert
        let model = GraphModel::new(n, params.modulus, &edges)
            .map_err(|e| GeneratorError::invalid(e.to_string()))?;

        let initial: StateVector = (0..n).map(|_| rng.gen_range(0..params.modulus)).collect();
        let mut goal = initial.clone();
        for _ in 0..params.scramble_moves {
            goal = model.apply(&goal, rng.gen_range(0..n));
        }

        Ok(PuzzleSample {
            model,
            initial,
            goal,
            replay: SeedReplay { seed },
        })
    }

    /// Draw the next sample from the master stream.
    pub fn generate_next(&mut self) -> Result<PuzzleSample, GeneratorError> {
        let seed = self.master_rng.next_u64();
        Self::generate_single(&self.params, seed)
    }

    /// Rebuild the exact sample a replay token came from.
    pub fn regenerate(&self, replay: &SeedReplay) -> Result<PuzzleSample, GeneratorError> {
        Self::generate_single(&self.params, replay.seed)
    }
}
