//! Bee-Colony Graph Coloring
//!
//! A local-search heuristic that colors a graph so no two adjacent vertices
//! share a color, while keeping the number of colors low. It does not look
//! for an optimal coloring.
//!
//! # Core Insight
//!
//! Hard vertices go first. Every vertex carries **nectar**, initially its
//! degree. Each pass sends out scouts to the richest unscouted vertices; a
//! scout clears and recolors its whole neighborhood greedily, then colors
//! itself, then its nectar is spent.
//!
//! # Lifecycle
//!
//! 1. [`ColoringEngine::new`] builds the initial [`ColoringState`]
//! 2. [`ColoringEngine::scouting_pass`] runs one iteration
//! 3. [`RunDriver::run`] repeats passes until every vertex has been scouted
//!    or the iteration limit is hit, sampling the color count on the way
//! 4. The [`RunOutcome`] is plain data for reporting
//!
//! Total scouting work is bounded by the vertex count regardless of the
//! per-pass scout quota.
//!
//! # Example
//!
//! ```
//! use apiary_coloring::{run, ColoringEngine, Termination};
//! use apiary_graph::Graph;
//!
//! let graph = Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
//! let mut engine = ColoringEngine::new(&graph, 3).unwrap();
//! let outcome = run(&mut engine, 100, 1).unwrap();
//!
//! assert_eq!(outcome.termination, Termination::Converged { iterations: 1 });
//! assert_eq!(outcome.distinct_colors(), 2);
//! ```

mod color;
mod driver;
mod engine;
mod error;
mod state;
mod validation;

pub use color::Color;
pub use driver::{run, RunConfig, RunDriver, RunOutcome, Termination};
pub use engine::{ColoringEngine, PassReport};
pub use error::{ColoringError, Result};
pub use state::{ColoringState, HistorySample};
pub use validation::{find_conflicts, validate_coloring, Conflict};
