//! Solution quality over iterations, as a text chart.

use std::fmt::Write;

use apiary_coloring::HistorySample;

use crate::{ReportError, Result};

/// Colors-in-use curve taken from a run's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityCurve {
    samples: Vec<HistorySample>,
}

impl QualityCurve {
    pub fn from_history(history: &[HistorySample]) -> Self {
        Self {
            samples: history.to_vec(),
        }
    }

    pub fn samples(&self) -> &[HistorySample] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Earliest sample with the fewest colors.
    pub fn best(&self) -> Option<HistorySample> {
        self.samples
            .iter()
            .copied()
            .min_by_key(|s| (s.distinct_colors, s.iteration))
    }

    /// Color count at the last sample.
    pub fn final_colors(&self) -> Option<usize> {
        self.samples.last().map(|s| s.distinct_colors)
    }

    /// Render one bar per sample, scaled so the largest count spans `width`.
    pub fn render(&self, width: usize) -> Result<String> {
        let peak = self
            .samples
            .iter()
            .map(|s| s.distinct_colors)
            .max()
            .ok_or(ReportError::EmptyHistory)?;
        let width = width.max(1);
        let label_width = self
            .samples
            .last()
            .map(|s| s.iteration.to_string().len())
            .unwrap_or(1);

        let mut out = String::new();
        let _ = writeln!(out, "colors used per iteration");
        for sample in &self.samples {
            let bar = if peak == 0 {
                0
            } else {
                (sample.distinct_colors * width).div_ceil(peak)
            };
            let _ = writeln!(
                out,
                "{:>label_width$} | {:<width$} {}",
                sample.iteration,
                "#".repeat(bar),
                sample.distinct_colors,
            );
        }
        Ok(out)
    }
}
