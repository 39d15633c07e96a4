//! Serializable picture of a finished run.

use std::io::Write;

use apiary_coloring::{HistorySample, RunOutcome, Termination};
use apiary_graph::Graph;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A vertex as drawn by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexState {
    pub id: usize,
    /// `None` if the run stopped before this vertex was colored
    pub color: Option<usize>,
    pub degree: usize,
}

/// An undirected edge, `u < v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeState {
    pub u: usize,
    pub v: usize,
}

/// Everything a renderer or plotter needs from one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringSnapshot {
    pub vertices: Vec<VertexState>,
    pub edges: Vec<EdgeState>,
    pub color_count: usize,
    pub termination: Termination,
    pub history: Vec<HistorySample>,
}

impl ColoringSnapshot {
    /// Capture `outcome` over the graph it was computed on.
    pub fn capture(graph: &Graph, outcome: &RunOutcome) -> Self {
        let vertices = graph
            .vertices()
            .zip(graph.degrees())
            .map(|(v, degree)| VertexState {
                id: v.index(),
                color: outcome.color(v).map(|c| c.value()),
                degree,
            })
            .collect();

        let edges = graph
            .edges()
            .map(|(u, v)| EdgeState {
                u: u.index(),
                v: v.index(),
            })
            .collect();

        Self {
            vertices,
            edges,
            color_count: outcome.distinct_colors(),
            termination: outcome.termination,
            history: outcome.history.clone(),
        }
    }

    /// Number of vertices that ended uncolored.
    pub fn uncolored_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.color.is_none()).count()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write pretty JSON followed by a newline.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}
