//! On-disk puzzle format (JSON) and conversion into the core model.
//!
//! Self-loop injection is a file-level switch (`add_self_loops`, default
//! on, matching the common "pressing a node bumps itself" convention);
//! the engine itself never adds edges.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use modgraph::graph::{Edge, GraphModel};

fn default_self_loops() -> bool {
    true
}

/// A complete puzzle instance as stored on disk.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PuzzleFile {
    pub node_count: usize,
    pub modulus: u32,
    /// Directed edges as `[from, to]` pairs, 0-indexed.
    pub edges: Vec<(usize, usize)>,
    pub initial: Vec<u32>,
    pub goal: Vec<u32>,
    #[serde(default = "default_self_loops")]
    pub add_self_loops: bool,
}

impl PuzzleFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading puzzle file {}", path.display()))?;
        let puzzle: PuzzleFile = serde_json::from_str(&text)
            .with_context(|| format!("parsing puzzle file {}", path.display()))?;
        Ok(puzzle)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing puzzle file {}", path.display()))?;
        Ok(())
    }

    /// Build the immutable model, applying the self-loop policy.
    pub fn build_model(&self) -> Result<GraphModel> {
        let mut edges: Vec<Edge> = self
            .edges
            .iter()
            .map(|&(from, to)| Edge::new(from, to))
            .collect();
        if self.add_self_loops {
            edges.extend(Edge::self_loops(self.node_count));
        }
        let model = GraphModel::new(self.node_count, self.modulus, &edges)?;
        Ok(model)
    }
}
