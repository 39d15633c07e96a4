//! Drives an engine to a terminal state and packages the result.

use apiary_graph::VertexId;
use tracing::info;

use crate::engine::ColoringEngine;
use crate::state::HistorySample;
use crate::validation::validate_coloring;
use crate::{Color, ColoringError, Result};

/// Iteration limits for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Upper bound on scouting passes (>= 1)
    pub max_iterations: usize,
    /// Record a history sample every this many passes (>= 1)
    pub log_interval: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            log_interval: 1,
        }
    }
}

impl RunConfig {
    /// Create a validated config.
    pub fn new(max_iterations: usize, log_interval: usize) -> Result<Self> {
        let config = Self {
            max_iterations,
            log_interval,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(ColoringError::InvalidConfiguration(
                "max_iterations must be at least 1".into(),
            ));
        }
        if self.log_interval == 0 {
            return Err(ColoringError::InvalidConfiguration(
                "log_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Whether a history sample is due after `iteration`.
    pub const fn is_sample_due(&self, iteration: usize) -> bool {
        iteration % self.log_interval == 0
    }
}

/// How a run ended. Both variants are normal outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Every vertex was scouted
    Converged { iterations: usize },
    /// The iteration limit hit first
    MaxIterationsReached { iterations: usize },
}

impl Termination {
    /// Passes executed.
    pub const fn iterations(&self) -> usize {
        match self {
            Termination::Converged { iterations } => *iterations,
            Termination::MaxIterationsReached { iterations } => *iterations,
        }
    }

    pub const fn is_converged(&self) -> bool {
        matches!(self, Termination::Converged { .. })
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::Converged { iterations } => {
                write!(f, "converged after {} iteration(s)", iterations)
            }
            Termination::MaxIterationsReached { iterations } => {
                write!(f, "stopped at iteration limit {}", iterations)
            }
        }
    }
}

/// Immutable result of a run, ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOutcome {
    /// Final color of every vertex
    pub colors: Vec<Option<Color>>,
    /// Convergence samples in iteration order
    pub history: Vec<HistorySample>,
    pub termination: Termination,
    /// Vertices scouted over the whole run
    pub scouted: usize,
}

impl RunOutcome {
    pub fn color(&self, vertex: VertexId) -> Option<Color> {
        self.colors.get(vertex.index()).copied().flatten()
    }

    pub fn distinct_colors(&self) -> usize {
        let mut used: Vec<Color> = self.colors.iter().flatten().copied().collect();
        used.sort_unstable();
        used.dedup();
        used.len()
    }

    pub fn is_converged(&self) -> bool {
        self.termination.is_converged()
    }
}

/// Executes scouting passes under a [`RunConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RunDriver {
    config: RunConfig,
}

impl RunDriver {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run `engine` until convergence or the iteration limit, then validate.
    ///
    /// Fails with [`ColoringError::InvariantViolation`] if the final coloring
    /// has adjacent vertices sharing a color; that only happens for graphs
    /// with asymmetric adjacency.
    pub fn run(&self, engine: &mut ColoringEngine<'_>) -> Result<RunOutcome> {
        self.config.validate()?;

        let mut termination = Termination::MaxIterationsReached {
            iterations: self.config.max_iterations,
        };

        for iteration in 1..=self.config.max_iterations {
            engine.scouting_pass(iteration)?;

            if self.config.is_sample_due(iteration) {
                engine.record_sample(iteration);
            }

            if engine.is_converged() {
                termination = Termination::Converged { iterations: iteration };
                break;
            }
        }

        let state = engine.state();
        info!(
            %termination,
            colors = state.distinct_colors(),
            scouted = state.scouted().len(),
            "colony run finished"
        );

        validate_coloring(engine.graph(), state.colors())?;

        Ok(RunOutcome {
            colors: state.colors().to_vec(),
            history: state.history().to_vec(),
            termination,
            scouted: state.scouted().len(),
        })
    }
}

/// Run `engine` with the given limits.
pub fn run(
    engine: &mut ColoringEngine<'_>,
    max_iterations: usize,
    log_interval: usize,
) -> Result<RunOutcome> {
    RunDriver::new(RunConfig::new(max_iterations, log_interval)?).run(engine)
}
