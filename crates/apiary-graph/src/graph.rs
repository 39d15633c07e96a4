//! Adjacency-set graph storage and queries.
//!
//! Neighbor sets are `BTreeSet`s so iteration order is the natural vertex
//! order. Everything downstream that walks a neighborhood is deterministic
//! for a fixed graph.

use std::collections::BTreeSet;

use crate::{GraphError, Result, VertexId};

/// An undirected graph over the vertices `0..num_vertices`.
///
/// The vertex count is fixed at construction. Graphs built with
/// [`Graph::empty`], [`Graph::from_edges`] or [`Graph::generate`] are always
/// symmetric. [`Graph::from_adjacency`] accepts raw lists as given and does
/// not repair asymmetry; use [`Graph::is_symmetric`] to check.
///
/// [`Graph::generate`]: crate::Graph::generate
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    adjacency: Vec<BTreeSet<VertexId>>,
}

impl Graph {
    /// A graph with `num_vertices` vertices and no edges.
    pub fn empty(num_vertices: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); num_vertices],
        }
    }

    /// Build a graph from undirected edges.
    ///
    /// Duplicate edges collapse into one. Out-of-range endpoints and
    /// self-loops are rejected.
    pub fn from_edges<I>(num_vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::empty(num_vertices);
        for (u, v) in edges {
            let (u, v) = (VertexId(u), VertexId(v));
            graph.check(u)?;
            graph.check(v)?;
            if u == v {
                return Err(GraphError::SelfLoop(u));
            }
            graph.add_edge(u, v);
        }
        Ok(graph)
    }

    /// Build a graph from raw per-vertex neighbor lists.
    ///
    /// List `i` holds the neighbors of vertex `i`. Entries are taken as-is:
    /// ranges and self-loops are checked, symmetry is not.
    pub fn from_adjacency(lists: Vec<Vec<usize>>) -> Result<Self> {
        let num_vertices = lists.len();
        let mut adjacency = Vec::with_capacity(num_vertices);

        for (u, list) in lists.into_iter().enumerate() {
            let mut set = BTreeSet::new();
            for v in list {
                if v >= num_vertices {
                    return Err(GraphError::UnknownVertex {
                        vertex: VertexId(v),
                        num_vertices,
                    });
                }
                if v == u {
                    return Err(GraphError::SelfLoop(VertexId(u)));
                }
                set.insert(VertexId(v));
            }
            adjacency.push(set);
        }

        Ok(Self { adjacency })
    }

    /// Insert `u -- v` in both directions. Callers check ranges.
    pub(crate) fn add_edge(&mut self, u: VertexId, v: VertexId) {
        self.adjacency[u.0].insert(v);
        self.adjacency[v.0].insert(u);
    }

    /// Neighbor set without a range check. Callers check ranges.
    pub(crate) fn adjacency_of(&self, vertex: VertexId) -> &BTreeSet<VertexId> {
        &self.adjacency[vertex.0]
    }

    fn check(&self, vertex: VertexId) -> Result<()> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex {
                vertex,
                num_vertices: self.num_vertices(),
            })
        }
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether `vertex` is in range.
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex.0 < self.adjacency.len()
    }

    /// All vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.adjacency.len()).map(VertexId)
    }

    /// The neighbor set of `vertex`.
    pub fn neighbors(&self, vertex: VertexId) -> Result<&BTreeSet<VertexId>> {
        self.check(vertex)?;
        Ok(&self.adjacency[vertex.0])
    }

    /// The number of neighbors of `vertex`.
    pub fn degree(&self, vertex: VertexId) -> Result<usize> {
        self.neighbors(vertex).map(BTreeSet::len)
    }

    /// Degrees of all vertices, in vertex order.
    pub fn degrees(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.iter().map(BTreeSet::len)
    }

    /// Largest degree in the graph (0 for an edgeless graph).
    pub fn max_degree(&self) -> usize {
        self.degrees().max().unwrap_or(0)
    }

    /// Every listed `(u, v)` pair, i.e. each undirected edge in both
    /// directions when the graph is symmetric.
    pub fn arcs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, set)| set.iter().map(move |&v| (VertexId(u), v)))
    }

    /// Each undirected edge exactly once, as `(low, high)`.
    ///
    /// A pair listed only in one direction still counts as one edge.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.arcs().filter_map(move |(u, v)| {
            if u < v {
                Some((u, v))
            } else if !self.adjacency[v.0].contains(&u) {
                Some((v, u))
            } else {
                None
            }
        })
    }

    /// Number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Whether `v` lists `u` for every `u` that lists `v`.
    pub fn is_symmetric(&self) -> bool {
        self.arcs().all(|(u, v)| self.adjacency[v.0].contains(&u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path3() -> Graph {
        Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap()
    }

    #[test]
    fn empty_graph_has_no_edges() {
        let g = Graph::empty(4);
        assert_eq!(g.num_vertices(), 4);
        assert_eq!(g.num_edges(), 0);
        assert_eq!(g.max_degree(), 0);
        assert!(g.is_symmetric());
    }

    #[test]
    fn edges_are_symmetric() {
        let g = path3();
        assert!(g.neighbors(VertexId(0)).unwrap().contains(&VertexId(1)));
        assert!(g.neighbors(VertexId(1)).unwrap().contains(&VertexId(0)));
        assert_eq!(g.degree(VertexId(1)).unwrap(), 2);
        assert!(g.is_symmetric());
    }

    #[test]
    fn duplicate_edges_collapse() {
        let g = Graph::from_edges(2, [(0, 1), (1, 0), (0, 1)]).unwrap();
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.arcs().count(), 2);
    }

    #[test]
    fn edges_listed_once_low_high() {
        let edges: Vec<_> = path3().edges().collect();
        assert_eq!(
            edges,
            vec![(VertexId(0), VertexId(1)), (VertexId(1), VertexId(2))]
        );
    }

    #[test]
    fn unknown_vertex_rejected() {
        let g = path3();
        assert_eq!(
            g.neighbors(VertexId(3)),
            Err(GraphError::UnknownVertex {
                vertex: VertexId(3),
                num_vertices: 3
            })
        );
        assert!(Graph::from_edges(3, [(0, 5)]).is_err());
    }

    #[test]
    fn self_loop_rejected() {
        assert_eq!(
            Graph::from_edges(3, [(1, 1)]),
            Err(GraphError::SelfLoop(VertexId(1)))
        );
        assert!(Graph::from_adjacency(vec![vec![0]]).is_err());
    }

    #[test]
    fn raw_adjacency_keeps_asymmetry() {
        let g = Graph::from_adjacency(vec![vec![1], vec![], vec![]]).unwrap();
        assert!(!g.is_symmetric());
        // One-directional pair still counts as one undirected edge
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.degree(VertexId(1)).unwrap(), 0);
    }

    #[test]
    fn neighbors_iterate_in_id_order() {
        let g = Graph::from_edges(5, [(2, 4), (2, 0), (2, 3), (2, 1)]).unwrap();
        let order: Vec<_> = g.neighbors(VertexId(2)).unwrap().iter().copied().collect();
        assert_eq!(order, vec![VertexId(0), VertexId(1), VertexId(3), VertexId(4)]);
    }
}
