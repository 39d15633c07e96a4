//! The scouting engine: local repair driven by nectar.
//!
//! # Scouting pass
//!
//! 1. Rank vertices by nectar, highest first, ties by vertex id
//! 2. Walk the ranking; every vertex with nectar left and not yet scouted
//!    becomes a scout until the pass quota is used up:
//!    - the scout is uncolored
//!    - each neighbor is uncolored and immediately given its lowest
//!      available color
//!    - the scout takes its lowest available color last
//!    - the scout's nectar drops to zero
//! 3. Isolated vertices that are still uncolored take color 0
//!
//! Nectar starts at the vertex degree and is only ever zeroed, so each
//! vertex is scouted at most once and a run does at most `n` scouting steps.
//!
//! # Available colors
//!
//! A vertex with `d` listed neighbors sees at most `d` distinct colors, so
//! one of `0..=d` is always free. Since `d < n`, the lowest free color lies
//! in `0..n`.

use std::collections::BTreeSet;

use apiary_graph::{Graph, VertexId};
use tracing::{debug, warn};

use crate::state::{ColoringState, HistorySample};
use crate::validation::Conflict;
use crate::{Color, ColoringError, Result};

/// What a single scouting pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    /// 1-based iteration index of the pass
    pub iteration: usize,
    /// Scouts processed, in processing order
    pub scouts: Vec<VertexId>,
    /// Isolated vertices colored without scouting
    pub settled: usize,
    /// Conflicts found around the scouts after their recoloring step
    pub conflicts: Vec<Conflict>,
}

/// Runs scouting passes over a borrowed graph, owning the coloring state.
#[derive(Debug, Clone)]
pub struct ColoringEngine<'g> {
    graph: &'g Graph,
    num_scouts: usize,
    state: ColoringState,
}

impl<'g> ColoringEngine<'g> {
    /// Create an engine in the initial state.
    ///
    /// `num_scouts` is the per-pass scout quota and must be positive.
    pub fn new(graph: &'g Graph, num_scouts: usize) -> Result<Self> {
        if num_scouts == 0 {
            return Err(ColoringError::InvalidConfiguration(
                "num_scouts must be positive".into(),
            ));
        }

        Ok(Self {
            graph,
            num_scouts,
            state: ColoringState::new(graph),
        })
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn num_scouts(&self) -> usize {
        self.num_scouts
    }

    pub fn state(&self) -> &ColoringState {
        &self.state
    }

    pub fn into_state(self) -> ColoringState {
        self.state
    }

    /// Every vertex has been drained of nectar.
    pub fn is_converged(&self) -> bool {
        self.state.is_exhausted()
    }

    pub fn distinct_colors(&self) -> usize {
        self.state.distinct_colors()
    }

    /// Lowest color not held by any colored neighbor of `vertex`.
    pub fn available_color(&self, vertex: VertexId) -> Result<Color> {
        let neighbors = self.graph.neighbors(vertex)?;
        let degree = neighbors.len();

        // Only colors 0..=degree can matter
        let mut taken = vec![false; degree + 1];
        for &n in neighbors {
            if let Some(Color(c)) = self.state.color(n) {
                if c <= degree {
                    taken[c] = true;
                }
            }
        }

        let free = taken.iter().position(|&t| !t).unwrap_or(degree);
        Ok(Color(free))
    }

    fn color_vertex(&mut self, vertex: VertexId) -> Result<Color> {
        let color = self.available_color(vertex)?;
        self.state.set_color(vertex, Some(color));
        Ok(color)
    }

    /// Reset and recolor each neighbor of `scout` in id order.
    fn recolor_neighbors(&mut self, scout: VertexId) -> Result<()> {
        let graph = self.graph;
        for &neighbor in graph.neighbors(scout)? {
            self.state.set_color(neighbor, None);
            self.color_vertex(neighbor)?;
        }
        Ok(())
    }

    /// Vertices by descending nectar, ties by ascending id.
    fn ranking(&self) -> Vec<VertexId> {
        let mut order: Vec<VertexId> = self.graph.vertices().collect();
        order.sort_by(|a, b| {
            self.state
                .nectar_of(*b)
                .cmp(&self.state.nectar_of(*a))
                .then(a.cmp(b))
        });
        order
    }

    /// Conflicts on edges listed by `scout` or by any of its neighbors.
    fn conflicts_around(&self, scout: VertexId) -> Result<Vec<Conflict>> {
        let mut found = BTreeSet::new();
        let neighbors = self.graph.neighbors(scout)?;
        let neighborhood = std::iter::once(scout).chain(neighbors.iter().copied());

        for x in neighborhood {
            let Some(cx) = self.state.color(x) else { continue };
            for &y in self.graph.neighbors(x)? {
                if self.state.color(y) == Some(cx) {
                    let (u, v) = if x < y { (x, y) } else { (y, x) };
                    found.insert(Conflict { u, v, color: cx });
                }
            }
        }

        Ok(found.into_iter().collect())
    }

    /// Scout a single vertex: uncolor it, repair its neighborhood, color it,
    /// drain its nectar.
    fn scout(&mut self, scout: VertexId) -> Result<Color> {
        self.state.set_color(scout, None);
        self.recolor_neighbors(scout)?;
        let color = self.color_vertex(scout)?;
        self.state.exhaust(scout);
        Ok(color)
    }

    /// Run one scouting pass.
    ///
    /// `iteration` only labels the report and log lines; it has no effect on
    /// which vertices are chosen.
    pub fn scouting_pass(&mut self, iteration: usize) -> Result<PassReport> {
        let mut scouts = Vec::new();
        let mut conflicts = Vec::new();

        for candidate in self.ranking() {
            if self.state.nectar_of(candidate) > 0 && !self.state.is_scouted(candidate) {
                let color = self.scout(candidate)?;
                scouts.push(candidate);
                debug!(iteration, scout = %candidate, %color, "scouted vertex");

                let local = self.conflicts_around(candidate)?;
                if !local.is_empty() {
                    warn!(
                        iteration,
                        scout = %candidate,
                        conflicts = local.len(),
                        "conflict left after recoloring step"
                    );
                    conflicts.extend(local);
                }
            }

            if scouts.len() >= self.num_scouts {
                break;
            }
        }

        let settled = self.settle_isolated()?;

        debug!(
            iteration,
            scouts = scouts.len(),
            settled,
            colors = self.state.distinct_colors(),
            "scouting pass complete"
        );

        Ok(PassReport {
            iteration,
            scouts,
            settled,
            conflicts,
        })
    }

    /// Give every uncolored degree-0 vertex its (trivial) color.
    fn settle_isolated(&mut self) -> Result<usize> {
        let graph = self.graph;
        let mut settled = 0;
        for vertex in graph.vertices() {
            if self.state.color(vertex).is_none() && graph.degree(vertex)? == 0 {
                self.color_vertex(vertex)?;
                settled += 1;
            }
        }
        Ok(settled)
    }

    /// Append a history sample for `iteration` and return it.
    pub fn record_sample(&mut self, iteration: usize) -> HistorySample {
        let sample = HistorySample {
            iteration,
            distinct_colors: self.state.distinct_colors(),
        };
        self.state.push_sample(sample);
        sample
    }
}
