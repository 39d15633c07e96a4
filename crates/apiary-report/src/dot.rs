//! Graphviz export.
//!
//! Fill colors cycle through a 20-entry categorical palette; uncolored
//! vertices are drawn white.

use std::fmt::Write;

use crate::snapshot::ColoringSnapshot;

/// Categorical palette, matplotlib `tab20` order.
pub const PALETTE: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c",
    "#98df8a", "#d62728", "#ff9896", "#9467bd", "#c5b0d5",
    "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f",
    "#c7c7c7", "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

const UNCOLORED: &str = "#ffffff";

/// Fill color for a color id.
pub fn fill_for(color: Option<usize>) -> &'static str {
    match color {
        Some(c) => PALETTE[c % PALETTE.len()],
        None => UNCOLORED,
    }
}

impl ColoringSnapshot {
    /// Render as an undirected Graphviz graph.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(out, "graph coloring {{");
        let _ = writeln!(out, "    node [shape=circle, style=filled];");

        for vertex in &self.vertices {
            let label = match vertex.color {
                Some(c) => format!("{}\\nc{}", vertex.id, c),
                None => vertex.id.to_string(),
            };
            let _ = writeln!(
                out,
                "    {} [label=\"{}\", fillcolor=\"{}\"];",
                vertex.id,
                label,
                fill_for(vertex.color)
            );
        }

        for edge in &self.edges {
            let _ = writeln!(out, "    {} -- {};", edge.u, edge.v);
        }

        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{EdgeState, VertexState};
    use apiary_coloring::Termination;

    fn snapshot() -> ColoringSnapshot {
        ColoringSnapshot {
            vertices: vec![
                VertexState { id: 0, color: Some(0), degree: 1 },
                VertexState { id: 1, color: None, degree: 1 },
            ],
            edges: vec![EdgeState { u: 0, v: 1 }],
            color_count: 1,
            termination: Termination::MaxIterationsReached { iterations: 1 },
            history: vec![],
        }
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(fill_for(Some(0)), fill_for(Some(20)));
        assert_eq!(fill_for(None), "#ffffff");
    }

    #[test]
    fn dot_has_nodes_and_edges() {
        let dot = snapshot().to_dot();
        assert!(dot.starts_with("graph coloring {"));
        assert!(dot.contains("0 [label=\"0\\nc0\", fillcolor=\"#1f77b4\"];"));
        assert!(dot.contains("1 [label=\"1\", fillcolor=\"#ffffff\"];"));
        assert!(dot.contains("0 -- 1;"));
        assert!(dot.ends_with("}\n"));
    }
}
