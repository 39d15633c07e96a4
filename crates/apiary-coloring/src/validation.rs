//! Conflict detection over a finished (or partial) coloring.
//!
//! Uncolored endpoints never conflict. Edges are taken from
//! [`Graph::edges`], so a pair listed in only one direction is still
//! checked.

use std::fmt;

use apiary_graph::{Graph, VertexId};

use crate::{Color, ColoringError, Result};

/// Two adjacent vertices holding the same color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conflict {
    /// Lower endpoint
    pub u: VertexId,
    /// Higher endpoint
    pub v: VertexId,
    /// The shared color
    pub color: Color,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} share {}", self.u, self.v, self.color)
    }
}

/// All conflicting edges in `colors`, ordered by endpoint.
pub fn find_conflicts(graph: &Graph, colors: &[Option<Color>]) -> Vec<Conflict> {
    let color_of = |v: VertexId| colors.get(v.index()).copied().flatten();

    graph
        .edges()
        .filter_map(|(u, v)| match (color_of(u), color_of(v)) {
            (Some(a), Some(b)) if a == b => Some(Conflict { u, v, color: a }),
            _ => None,
        })
        .collect()
}

/// Fail with [`ColoringError::InvariantViolation`] if any edge conflicts.
pub fn validate_coloring(graph: &Graph, colors: &[Option<Color>]) -> Result<()> {
    if colors.len() != graph.num_vertices() {
        return Err(ColoringError::InvalidConfiguration(format!(
            "coloring covers {} vertices, graph has {}",
            colors.len(),
            graph.num_vertices()
        )));
    }

    let conflicts = find_conflicts(graph, colors);
    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(ColoringError::InvariantViolation { conflicts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap()
    }

    #[test]
    fn proper_coloring_passes() {
        let colors = [Some(Color(0)), Some(Color(1)), Some(Color(2))];
        assert!(validate_coloring(&triangle(), &colors).is_ok());
    }

    #[test]
    fn uncolored_endpoints_never_conflict() {
        let colors = [None, None, Some(Color(0))];
        assert!(find_conflicts(&triangle(), &colors).is_empty());
    }

    #[test]
    fn shared_color_is_reported_once() {
        let colors = [Some(Color(0)), Some(Color(1)), Some(Color(0))];
        let conflicts = find_conflicts(&triangle(), &colors);
        assert_eq!(
            conflicts,
            vec![Conflict {
                u: VertexId(0),
                v: VertexId(2),
                color: Color(0)
            }]
        );

        match validate_coloring(&triangle(), &colors) {
            Err(ColoringError::InvariantViolation { conflicts }) => assert_eq!(conflicts.len(), 1),
            other => panic!("expected invariant violation, got {:?}", other),
        }
    }

    #[test]
    fn one_directional_pair_is_checked() {
        let graph = Graph::from_adjacency(vec![vec![], vec![0]]).unwrap();
        let colors = [Some(Color(4)), Some(Color(4))];
        assert_eq!(find_conflicts(&graph, &colors).len(), 1);
    }

    #[test]
    fn length_mismatch_is_a_configuration_error() {
        let result = validate_coloring(&triangle(), &[Some(Color(0))]);
        assert!(matches!(result, Err(ColoringError::InvalidConfiguration(_))));
    }

    #[test]
    fn conflict_display() {
        let conflict = Conflict {
            u: VertexId(1),
            v: VertexId(5),
            color: Color(3),
        };
        assert_eq!(conflict.to_string(), "1-5 share c3");
    }
}
