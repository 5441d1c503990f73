//! Graph model for increment puzzles: nodes, directed edges, and the pure
//! mod-m transition.
//!
//! - `Edge`: directed edge `from → to`.
//! - `GraphModel`: node count, modulus, and deduplicated sorted adjacency.
//! - `apply`: the sole transition; returns a fresh state vector.
//!
//! The model never injects self-loops. A node that should bump its own
//! value needs an explicit `(i, i)` edge; `Edge::self_loops` builds that
//! set for callers that want the convention.

use std::fmt;

/// A state vector: one value in `[0, modulus)` per node.
pub type StateVector = Vec<u32>;

/// Directed edge `from → to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    #[inline]
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// One self-loop per node, `(i, i)` for `i in 0..node_count`.
    ///
    /// Appending these to an edge list makes every press bump the pressed
    /// node itself. This is caller policy, not a model default.
    pub fn self_loops(node_count: usize) -> Vec<Edge> {
        (0..node_count).map(|i| Edge::new(i, i)).collect()
    }
}

/// Errors from [`GraphModel::new`].
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `node_count` was zero; a puzzle needs at least one node.
    NoNodes,
    /// `modulus` below 2 leaves no room for distinct values.
    BadModulus { modulus: u32 },
    /// An edge endpoint lies outside `[0, node_count)`.
    EdgeOutOfRange { edge: Edge, node_count: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoNodes => write!(f, "graph needs at least one node"),
            ConfigError::BadModulus { modulus } => {
                write!(f, "modulus must be >= 2, got {modulus}")
            }
            ConfigError::EdgeOutOfRange { edge, node_count } => write!(
                f,
                "edge {} -> {} references a node outside 0..{}",
                edge.from, edge.to, node_count
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors from vector validation against a model.
#[derive(Debug, PartialEq, Eq)]
pub enum VectorError {
    LengthMismatch { expected: usize, got: usize },
    ValueOutOfRange { index: usize, value: u32, modulus: u32 },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::LengthMismatch { expected, got } => {
                write!(f, "state vector has {got} components, model has {expected} nodes")
            }
            VectorError::ValueOutOfRange {
                index,
                value,
                modulus,
            } => write!(
                f,
                "component {index} is {value}, outside 0..{modulus}"
            ),
        }
    }
}

impl std::error::Error for VectorError {}

/// Immutable puzzle configuration: who gets bumped when a node is pressed.
///
/// Constructed once per puzzle; read-only afterwards, so it may be shared
/// freely across solver calls.
#[derive(Clone, Debug)]
pub struct GraphModel {
    node_count: usize,
    modulus: u32,
    adjacency: Vec<Vec<usize>>,
}

impl GraphModel {
    /// Build a model from an edge list.
    ///
    /// Duplicate edges are collapsed (a repeated edge would double-bump its
    /// target, which is never the intended semantic) and each adjacency
    /// list is sorted ascending so downstream expansion order is stable.
    pub fn new(node_count: usize, modulus: u32, edges: &[Edge]) -> Result<Self, ConfigError> {
        if node_count == 0 {
            return Err(ConfigError::NoNodes);
        }
        if modulus < 2 {
            return Err(ConfigError::BadModulus { modulus });
        }
        let mut adjacency = vec![Vec::new(); node_count];
        for &edge in edges {
            if edge.from >= node_count || edge.to >= node_count {
                return Err(ConfigError::EdgeOutOfRange { edge, node_count });
            }
            adjacency[edge.from].push(edge.to);
        }
        for targets in &mut adjacency {
            targets.sort_unstable();
            targets.dedup();
        }
        Ok(Self {
            node_count,
            modulus,
            adjacency,
        })
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    #[inline]
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Targets bumped when `node` is pressed (sorted, deduplicated).
    #[inline]
    pub fn targets(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Press `node`: every adjacency target gains 1 mod `modulus`.
    ///
    /// Pure: returns a new vector, leaving `values` untouched, so the
    /// search can branch many times from the same parent state.
    pub fn apply(&self, values: &[u32], node: usize) -> StateVector {
        debug_assert_eq!(values.len(), self.node_count);
        let mut next = values.to_vec();
        for &t in &self.adjacency[node] {
            next[t] = (next[t] + 1) % self.modulus;
        }
        next
    }

    /// Structural equality of two fixed-length vectors.
    #[inline]
    pub fn matches(a: &[u32], b: &[u32]) -> bool {
        a == b
    }

    /// Validate a vector's length and component range against this model.
    pub fn check_vector(&self, values: &[u32]) -> Result<(), VectorError> {
        if values.len() != self.node_count {
            return Err(VectorError::LengthMismatch {
                expected: self.node_count,
                got: values.len(),
            });
        }
        for (index, &value) in values.iter().enumerate() {
            if value >= self.modulus {
                return Err(VectorError::ValueOutOfRange {
                    index,
                    value,
                    modulus: self.modulus,
                });
            }
        }
        Ok(())
    }

    /// The state after each move, starting from `initial` (included first).
    ///
    /// Drives step-by-step replay of a solution in a host UI.
    pub fn replay(&self, initial: &[u32], moves: &[usize]) -> Vec<StateVector> {
        let mut states = Vec::with_capacity(moves.len() + 1);
        states.push(initial.to_vec());
        for &m in moves {
            let next = self.apply(states.last().unwrap(), m);
            states.push(next);
        }
        states
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_model() -> GraphModel {
        // self-loops on both nodes plus 0 -> 1
        let mut edges = Edge::self_loops(2);
        edges.push(Edge::new(0, 1));
        GraphModel::new(2, 3, &edges).unwrap()
    }

    #[test]
    fn construction_rejects_bad_inputs() {
        assert_eq!(
            GraphModel::new(0, 3, &[]).unwrap_err(),
            ConfigError::NoNodes
        );
        assert_eq!(
            GraphModel::new(2, 1, &[]).unwrap_err(),
            ConfigError::BadModulus { modulus: 1 }
        );
        let bad = Edge::new(0, 2);
        assert_eq!(
            GraphModel::new(2, 3, &[bad]).unwrap_err(),
            ConfigError::EdgeOutOfRange {
                edge: bad,
                node_count: 2
            }
        );
    }

    #[test]
    fn duplicate_edges_bump_once() {
        let edges = [Edge::new(0, 1), Edge::new(0, 1), Edge::new(0, 1)];
        let g = GraphModel::new(2, 5, &edges).unwrap();
        assert_eq!(g.targets(0), &[1]);
        assert_eq!(g.apply(&[0, 0], 0), vec![0, 1]);
    }

    #[test]
    fn apply_is_pure_and_leaves_unreached_components() {
        let g = two_node_model();
        let before = vec![2, 1];
        let after = g.apply(&before, 1);
        // node 1 only loops onto itself; node 0 is unreached
        assert_eq!(after, vec![2, 2]);
        assert_eq!(before, vec![2, 1]);
    }

    #[test]
    fn apply_wraps_at_modulus() {
        let g = two_node_model();
        assert_eq!(g.apply(&[2, 2], 0), vec![0, 0]);
    }

    #[test]
    fn no_self_loop_means_own_value_fixed() {
        let g = GraphModel::new(2, 3, &[Edge::new(0, 1)]).unwrap();
        assert_eq!(g.apply(&[0, 0], 0), vec![0, 1]);
    }

    #[test]
    fn check_vector_catches_length_and_range() {
        let g = two_node_model();
        assert!(g.check_vector(&[1, 2]).is_ok());
        assert_eq!(
            g.check_vector(&[1]).unwrap_err(),
            VectorError::LengthMismatch {
                expected: 2,
                got: 1
            }
        );
        assert_eq!(
            g.check_vector(&[1, 3]).unwrap_err(),
            VectorError::ValueOutOfRange {
                index: 1,
                value: 3,
                modulus: 3
            }
        );
    }

    #[test]
    fn replay_tracks_each_intermediate_state() {
        let g = two_node_model();
        let states = g.replay(&[0, 0], &[0, 1]);
        assert_eq!(states, vec![vec![0, 0], vec![1, 1], vec![1, 2]]);
    }
}
