//! Bounded-degree random graph generation.
//!
//! Vertices are visited in id order. Each draws a target degree uniformly
//! from `[min_degree, max_degree]` and is wired to distinct random partners
//! until it reaches the target or runs out of partners. A partner must not
//! be the vertex itself, must not already be adjacent, and must still have
//! room below `max_degree`. Running out of partners is accepted: the vertex
//! keeps whatever degree it got.

use rand::Rng;
use tracing::debug;

use crate::{Graph, GraphError, Result, VertexId};

/// Parameters for [`Graph::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Number of vertices (> 0)
    pub num_vertices: usize,
    /// Lower bound of each vertex's target degree
    pub min_degree: usize,
    /// Upper bound of every vertex's final degree (< num_vertices)
    pub max_degree: usize,
}

impl GeneratorConfig {
    /// Create a config. Call [`validate`](Self::validate) before use, or let
    /// [`Graph::generate`] do it.
    pub const fn new(num_vertices: usize, min_degree: usize, max_degree: usize) -> Self {
        Self {
            num_vertices,
            min_degree,
            max_degree,
        }
    }

    /// Check `num_vertices > 0` and `min_degree <= max_degree < num_vertices`.
    pub fn validate(&self) -> Result<()> {
        if self.num_vertices == 0 {
            return Err(GraphError::InvalidConfiguration(
                "num_vertices must be positive".into(),
            ));
        }
        if self.min_degree > self.max_degree {
            return Err(GraphError::InvalidConfiguration(format!(
                "min_degree {} exceeds max_degree {}",
                self.min_degree, self.max_degree
            )));
        }
        if self.max_degree >= self.num_vertices {
            return Err(GraphError::InvalidConfiguration(format!(
                "max_degree {} must be below num_vertices {}",
                self.max_degree, self.num_vertices
            )));
        }
        Ok(())
    }
}

/// A vertex whose final degree stayed below the target it drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegreeShortfall {
    pub vertex: VertexId,
    /// Degree drawn from `[min_degree, max_degree]`
    pub target: usize,
    /// Degree in the finished graph
    pub reached: usize,
}

/// Output of [`Graph::generate_detailed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGraph {
    pub graph: Graph,
    /// Vertices that ran out of partners, in id order
    pub shortfall: Vec<DegreeShortfall>,
}

impl GeneratedGraph {
    /// Whether every vertex reached its drawn target degree.
    pub fn is_exact(&self) -> bool {
        self.shortfall.is_empty()
    }

    /// Shortfall entries whose final degree is also below `min_degree`.
    pub fn below_min_degree(
        &self,
        min_degree: usize,
    ) -> impl Iterator<Item = &DegreeShortfall> {
        self.shortfall.iter().filter(move |s| s.reached < min_degree)
    }
}

impl Graph {
    /// Generate a random graph with bounded degrees.
    ///
    /// The result is symmetric, has no self-loops or multi-edges, and every
    /// degree is at most `config.max_degree`. Degrees may fall short of
    /// `config.min_degree` when partners run out; use
    /// [`generate_detailed`](Self::generate_detailed) to see where.
    pub fn generate<R: Rng>(config: GeneratorConfig, rng: &mut R) -> Result<Self> {
        Self::generate_detailed(config, rng).map(|generated| generated.graph)
    }

    /// Like [`generate`](Self::generate), also reporting every vertex whose
    /// final degree is below its drawn target.
    pub fn generate_detailed<R: Rng>(
        config: GeneratorConfig,
        rng: &mut R,
    ) -> Result<GeneratedGraph> {
        config.validate()?;

        let mut graph = Graph::empty(config.num_vertices);
        let mut targets = Vec::with_capacity(config.num_vertices);

        for u in 0..config.num_vertices {
            let vertex = VertexId(u);
            let target = rng.gen_range(config.min_degree..=config.max_degree);
            targets.push(target);

            let mut candidates: Vec<VertexId> = graph
                .vertices()
                .filter(|&v| {
                    v != vertex
                        && !graph.adjacency_of(vertex).contains(&v)
                        && graph.adjacency_of(v).len() < config.max_degree
                })
                .collect();

            while graph.adjacency_of(vertex).len() < target && !candidates.is_empty() {
                let pick = rng.gen_range(0..candidates.len());
                let partner = candidates.swap_remove(pick);
                graph.add_edge(vertex, partner);
            }
        }

        // Later vertices may still top up an early one, so judge final degrees
        let shortfall: Vec<DegreeShortfall> = targets
            .into_iter()
            .enumerate()
            .filter_map(|(u, target)| {
                let reached = graph.adjacency_of(VertexId(u)).len();
                (reached < target).then_some(DegreeShortfall {
                    vertex: VertexId(u),
                    target,
                    reached,
                })
            })
            .collect();

        for s in &shortfall {
            debug!(
                vertex = %s.vertex,
                target = s.target,
                reached = s.reached,
                "degree target not reached"
            );
        }
        debug!(
            vertices = config.num_vertices,
            edges = graph.num_edges(),
            shortfall = shortfall.len(),
            "generated random graph"
        );

        Ok(GeneratedGraph { graph, shortfall })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_malformed_configs() {
        assert!(GeneratorConfig::new(0, 0, 0).validate().is_err());
        assert!(GeneratorConfig::new(5, 3, 2).validate().is_err());
        assert!(GeneratorConfig::new(5, 1, 5).validate().is_err());
        assert!(GeneratorConfig::new(5, 0, 4).validate().is_ok());
        assert!(GeneratorConfig::new(1, 0, 0).validate().is_ok());
    }

    #[test]
    fn generate_propagates_validation() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = Graph::generate(GeneratorConfig::new(3, 0, 3), &mut rng);
        assert!(matches!(result, Err(GraphError::InvalidConfiguration(_))));
    }

    #[test]
    fn same_seed_same_graph() {
        let config = GeneratorConfig::new(30, 1, 5);
        let a = Graph::generate(config, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = Graph::generate(config, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_degree_bounds_give_edgeless_graph() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = Graph::generate(GeneratorConfig::new(10, 0, 0), &mut rng).unwrap();
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn complete_graph_when_degree_is_saturated() {
        // Every vertex wants n - 1 partners and nobody is capped below that
        let mut rng = StdRng::seed_from_u64(11);
        let g = Graph::generate(GeneratorConfig::new(6, 5, 5), &mut rng).unwrap();
        assert_eq!(g.num_edges(), 15);
        assert!(g.degrees().all(|d| d == 5));
    }

    #[test]
    fn shortfall_reports_final_degrees() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = GeneratorConfig::new(5, 3, 4);
        let generated = Graph::generate_detailed(config, &mut rng).unwrap();

        for s in &generated.shortfall {
            assert!(s.reached < s.target);
            assert_eq!(generated.graph.degree(s.vertex).unwrap(), s.reached);
        }
        let total: usize = generated.graph.degrees().sum();
        assert_eq!(total % 2, 0);
    }

    #[test]
    fn saturated_config_has_no_shortfall() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = GeneratorConfig::new(6, 5, 5);
        let generated = Graph::generate_detailed(config, &mut rng).unwrap();
        assert!(generated.is_exact());
        assert_eq!(generated.below_min_degree(5).count(), 0);
    }

    #[test]
    fn odd_complete_target_forces_shortfall() {
        // Five vertices of degree 3 would need an odd degree sum
        let mut rng = StdRng::seed_from_u64(2);
        let config = GeneratorConfig::new(5, 3, 3);
        let generated = Graph::generate_detailed(config, &mut rng).unwrap();
        assert!(!generated.is_exact());
        assert!(generated.below_min_degree(3).count() >= 1);
    }

    #[test]
    fn generate_matches_detailed_graph() {
        let config = GeneratorConfig::new(20, 3, 4);
        let plain = Graph::generate(config, &mut StdRng::seed_from_u64(9)).unwrap();
        let detailed = Graph::generate_detailed(config, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(plain, detailed.graph);
    }

    #[test]
    fn low_degree_only_when_partners_saturated() {
        for seed in 0..200 {
            let config = GeneratorConfig::new(20, 3, 4);
            let g = Graph::generate(config, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_saturated_below_min(&g, config);
        }
    }

    /// A vertex under `min_degree` is only acceptable if every vertex it is
    /// not adjacent to is already at `max_degree`.
    fn assert_saturated_below_min(g: &Graph, config: GeneratorConfig) {
        for u in g.vertices() {
            let neighbors = g.neighbors(u).unwrap();
            if neighbors.len() >= config.min_degree {
                continue;
            }
            for v in g.vertices().filter(|&v| v != u && !neighbors.contains(&v)) {
                assert_eq!(
                    g.degree(v).unwrap(),
                    config.max_degree,
                    "{u} has degree {} but non-neighbor {v} still had room",
                    neighbors.len()
                );
            }
        }
    }

    proptest! {
        #[test]
        fn generated_graphs_respect_invariants(
            seed in any::<u64>(),
            n in 1usize..40,
            a in 0usize..10,
            b in 0usize..10,
        ) {
            let max_degree = a.max(b).min(n - 1);
            let min_degree = a.min(b).min(max_degree);
            let config = GeneratorConfig::new(n, min_degree, max_degree);
            let g = Graph::generate(config, &mut StdRng::seed_from_u64(seed)).unwrap();

            prop_assert_eq!(g.num_vertices(), n);
            prop_assert!(g.is_symmetric());
            for v in g.vertices() {
                let neighbors = g.neighbors(v).unwrap();
                prop_assert!(!neighbors.contains(&v));
                prop_assert!(neighbors.len() <= max_degree);
            }
            assert_saturated_below_min(&g, config);
        }
    }
}
