//! Apiary Run Reports
//!
//! Turns the plain result data of a colony run into something a person or
//! another tool can look at. Nothing here feeds back into the heuristic.
//!
//! # Architecture
//!
//! - **Snapshot**: vertices with final colors, edges, termination, history;
//!   serialized as JSON for external plotting and drawing tools
//! - **Graphviz**: `ColoringSnapshot::to_dot` for `dot -Tsvg`
//! - **Quality curve**: distinct colors per sampled iteration as a text chart
//!
//! # Usage
//!
//! ```ignore
//! let outcome = run(&mut engine, 100, 1)?;
//! let snapshot = ColoringSnapshot::capture(&graph, &outcome);
//! std::fs::write("coloring.dot", snapshot.to_dot())?;
//! println!("{}", QualityCurve::from_history(&outcome.history).render(40)?);
//! ```

mod dot;
mod error;
mod quality;
mod snapshot;

pub use dot::{fill_for, PALETTE};
pub use error::{ReportError, Result};
pub use quality::QualityCurve;
pub use snapshot::{ColoringSnapshot, EdgeState, VertexState};

#[cfg(test)]
mod tests {
    use super::*;
    use apiary_coloring::{run, ColoringEngine};
    use apiary_graph::Graph;

    #[test]
    fn snapshot_and_curve_agree_on_final_colors() {
        let graph = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();
        let mut engine = ColoringEngine::new(&graph, 1).unwrap();
        let outcome = run(&mut engine, 100, 1).unwrap();

        let snapshot = ColoringSnapshot::capture(&graph, &outcome);
        let curve = QualityCurve::from_history(&outcome.history);

        assert_eq!(curve.final_colors(), Some(snapshot.color_count));
        assert_eq!(snapshot.edges.len(), 5);
        assert_eq!(snapshot.to_dot().matches(" -- ").count(), 5);
    }
}
