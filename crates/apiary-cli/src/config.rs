//! Experiment configuration: defaults, `APIARY_*` environment variables,
//! then command-line flags, each overriding the previous.

use std::str::FromStr;

use apiary_coloring::{ColoringError, RunConfig};
use apiary_graph::{GeneratorConfig, GraphError};
use thiserror::Error;

/// Errors from assembling the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Coloring(#[from] ColoringError),
}

/// What to print on stdout after the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summary and quality chart
    #[default]
    Text,
    /// Snapshot as JSON
    Json,
    /// Graphviz source
    Dot,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "dot" => Ok(Self::Dot),
            _ => Err(()),
        }
    }
}

/// All parameters of one generate-and-color experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentConfig {
    pub num_vertices: usize,
    pub min_degree: usize,
    pub max_degree: usize,
    /// Scouts per pass
    pub num_scouts: usize,
    pub max_iterations: usize,
    pub log_interval: usize,
    /// Seed for the graph generator
    pub seed: u64,
    pub format: OutputFormat,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            num_vertices: 15,
            min_degree: 1,
            max_degree: 5,
            num_scouts: 1,
            max_iterations: 100,
            log_interval: 1,
            seed: 42,
            format: OutputFormat::Text,
        }
    }
}

pub const USAGE: &str = "\
Usage: apiary [OPTIONS]

Generate a random bounded-degree graph and color it with the bee-colony heuristic.

Options:
  --vertices <N>        number of vertices            [env: APIARY_VERTICES, default: 15]
  --min-degree <N>      minimum target degree         [env: APIARY_MIN_DEGREE, default: 1]
  --max-degree <N>      maximum degree                [env: APIARY_MAX_DEGREE, default: 5]
  --scouts <N>          scouts per pass               [env: APIARY_SCOUTS, default: 1]
  --iterations <N>      maximum scouting passes       [env: APIARY_MAX_ITERATIONS, default: 100]
  --log-interval <N>    sample color count every N    [env: APIARY_LOG_INTERVAL, default: 1]
  --seed <N>            generator seed                [env: APIARY_SEED, default: 42]
  --format <FMT>        text | json | dot             [default: text]
  -h, --help            print this help

Logging is controlled with RUST_LOG (default: apiary=info).";

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

impl ExperimentConfig {
    /// Defaults overridden by `APIARY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (the environment, in production).
    pub fn with_lookup<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("APIARY_VERTICES") {
            self.num_vertices = parse("APIARY_VERTICES", &v)?;
        }
        if let Some(v) = lookup("APIARY_MIN_DEGREE") {
            self.min_degree = parse("APIARY_MIN_DEGREE", &v)?;
        }
        if let Some(v) = lookup("APIARY_MAX_DEGREE") {
            self.max_degree = parse("APIARY_MAX_DEGREE", &v)?;
        }
        if let Some(v) = lookup("APIARY_SCOUTS") {
            self.num_scouts = parse("APIARY_SCOUTS", &v)?;
        }
        if let Some(v) = lookup("APIARY_MAX_ITERATIONS") {
            self.max_iterations = parse("APIARY_MAX_ITERATIONS", &v)?;
        }
        if let Some(v) = lookup("APIARY_LOG_INTERVAL") {
            self.log_interval = parse("APIARY_LOG_INTERVAL", &v)?;
        }
        if let Some(v) = lookup("APIARY_SEED") {
            self.seed = parse("APIARY_SEED", &v)?;
        }
        Ok(self)
    }

    /// Apply `--flag value` / `--flag=value` arguments (program name excluded).
    pub fn with_args<I>(mut self, args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg, None),
            };

            let value = match inline {
                Some(value) => value,
                None => args
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue(flag.clone()))?,
            };

            match flag.as_str() {
                "--vertices" => self.num_vertices = parse(&flag, &value)?,
                "--min-degree" => self.min_degree = parse(&flag, &value)?,
                "--max-degree" => self.max_degree = parse(&flag, &value)?,
                "--scouts" => self.num_scouts = parse(&flag, &value)?,
                "--iterations" => self.max_iterations = parse(&flag, &value)?,
                "--log-interval" => self.log_interval = parse(&flag, &value)?,
                "--seed" => self.seed = parse(&flag, &value)?,
                "--format" => self.format = parse(&flag, &value)?,
                _ => return Err(ConfigError::UnknownFlag(flag)),
            }
        }

        Ok(self)
    }

    /// Check every construction parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator_config().validate()?;
        self.run_config()?;
        if self.num_scouts == 0 {
            let err = ColoringError::InvalidConfiguration("num_scouts must be positive".into());
            return Err(err.into());
        }
        Ok(())
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.num_vertices, self.min_degree, self.max_degree)
    }

    pub fn run_config(&self) -> Result<RunConfig, ConfigError> {
        Ok(RunConfig::new(self.max_iterations, self.log_interval)?)
    }
}
