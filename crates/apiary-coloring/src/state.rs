//! Per-vertex coloring state for one colony run.

use std::collections::BTreeSet;

use apiary_graph::{Graph, VertexId};

use crate::Color;

/// One convergence sample: how many colors were in use after a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistorySample {
    /// 1-based iteration the sample was taken after
    pub iteration: usize,
    /// Distinct colors assigned at that point (uncolored excluded)
    pub distinct_colors: usize,
}

/// Colors, nectar and scouting bookkeeping for every vertex.
///
/// Created from a graph in the initial state: everything uncolored, nectar
/// equal to degree, nobody scouted, empty history. Only the engine mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColoringState {
    colors: Vec<Option<Color>>,
    nectar: Vec<usize>,
    scouted: BTreeSet<VertexId>,
    history: Vec<HistorySample>,
}

impl ColoringState {
    /// Initial state for `graph`.
    pub fn new(graph: &Graph) -> Self {
        Self {
            colors: vec![None; graph.num_vertices()],
            nectar: graph.degrees().collect(),
            scouted: BTreeSet::new(),
            history: Vec::new(),
        }
    }

    /// Color of `vertex`, `None` if uncolored or out of range.
    pub fn color(&self, vertex: VertexId) -> Option<Color> {
        self.colors.get(vertex.index()).copied().flatten()
    }

    /// Nectar of `vertex` (0 if out of range).
    pub fn nectar_of(&self, vertex: VertexId) -> usize {
        self.nectar.get(vertex.index()).copied().unwrap_or(0)
    }

    pub fn colors(&self) -> &[Option<Color>] {
        &self.colors
    }

    pub fn nectar(&self) -> &[usize] {
        &self.nectar
    }

    pub fn scouted(&self) -> &BTreeSet<VertexId> {
        &self.scouted
    }

    pub fn is_scouted(&self, vertex: VertexId) -> bool {
        self.scouted.contains(&vertex)
    }

    pub fn history(&self) -> &[HistorySample] {
        &self.history
    }

    /// Number of distinct colors in use.
    pub fn distinct_colors(&self) -> usize {
        self.colors.iter().flatten().collect::<BTreeSet<_>>().len()
    }

    /// Number of vertices currently holding a color.
    pub fn colored_count(&self) -> usize {
        self.colors.iter().filter(|c| c.is_some()).count()
    }

    /// Whether every vertex has been drained of nectar.
    pub fn is_exhausted(&self) -> bool {
        self.nectar.iter().all(|&n| n == 0)
    }

    pub(crate) fn set_color(&mut self, vertex: VertexId, color: Option<Color>) {
        self.colors[vertex.index()] = color;
    }

    /// Record `vertex` as scouted and drain its nectar.
    pub(crate) fn exhaust(&mut self, vertex: VertexId) {
        self.scouted.insert(vertex);
        self.nectar[vertex.index()] = 0;
    }

    pub(crate) fn push_sample(&mut self, sample: HistorySample) {
        self.history.push(sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_mirrors_degrees() {
        let graph = Graph::from_edges(4, [(0, 1), (0, 2), (0, 3)]).unwrap();
        let state = ColoringState::new(&graph);

        assert_eq!(state.nectar(), &[3, 1, 1, 1]);
        assert!(state.colors().iter().all(Option::is_none));
        assert!(state.scouted().is_empty());
        assert!(state.history().is_empty());
        assert_eq!(state.distinct_colors(), 0);
        assert!(!state.is_exhausted());
    }

    #[test]
    fn nectar_keeps_full_degree() {
        // Degrees are stored as-is, no narrowing
        let hub = 300;
        let graph = Graph::from_edges(hub + 1, (1..=hub).map(|leaf| (0, leaf))).unwrap();
        let state = ColoringState::new(&graph);

        assert_eq!(state.nectar_of(VertexId(0)), hub);
        assert_eq!(state.nectar_of(VertexId(0)), graph.degree(VertexId(0)).unwrap());
    }

    #[test]
    fn edgeless_graph_starts_exhausted() {
        let state = ColoringState::new(&Graph::empty(3));
        assert!(state.is_exhausted());
    }

    #[test]
    fn distinct_colors_ignores_uncolored() {
        let graph = Graph::empty(4);
        let mut state = ColoringState::new(&graph);
        state.set_color(VertexId(0), Some(Color(2)));
        state.set_color(VertexId(1), Some(Color(2)));
        state.set_color(VertexId(2), Some(Color(0)));

        assert_eq!(state.distinct_colors(), 2);
        assert_eq!(state.colored_count(), 3);
        assert_eq!(state.color(VertexId(3)), None);
        assert_eq!(state.color(VertexId(99)), None);
    }

    #[test]
    fn exhaust_marks_scouted_and_drains() {
        let graph = Graph::from_edges(2, [(0, 1)]).unwrap();
        let mut state = ColoringState::new(&graph);
        state.exhaust(VertexId(1));

        assert!(state.is_scouted(VertexId(1)));
        assert_eq!(state.nectar_of(VertexId(1)), 0);
        assert_eq!(state.nectar_of(VertexId(0)), 1);
    }
}
