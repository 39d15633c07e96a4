//! Apiary Graph Model
//!
//! Undirected graphs over dense vertex ids `0..n`, with adjacency queries
//! and bounded-degree random generation.
//!
//! # Invariants
//!
//! - Adjacency is symmetric: `v ∈ N(u)` iff `u ∈ N(v)`
//! - No self-loops, no multi-edges
//! - The vertex count never changes after construction
//!
//! Raw adjacency lists loaded through [`Graph::from_adjacency`] are the one
//! exception to symmetry; downstream validation reports the damage.
//!
//! # Generation
//!
//! [`Graph::generate`] takes the random source as an argument, so a seeded
//! `StdRng` reproduces the same graph on every run. Targets that could not be
//! met are reported by [`Graph::generate_detailed`].

mod error;
mod generate;
mod graph;
mod vertex;

pub use error::{GraphError, Result};
pub use generate::{DegreeShortfall, GeneratedGraph, GeneratorConfig};
pub use graph::Graph;
pub use vertex::VertexId;
