use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;
use crate::opt::score::ScoringPolicy;

/// Configuration for the first-fit grid (FFG) packer and its multi-start optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct FFGConfig {
    /// Upper bound on the step of the position grid (mm). The effective step is `min(grid_step, spacing)`
    pub grid_step: f64,
    /// Lower bound on the effective step of the position grid (mm), prevents a zero step when spacing is zero
    pub min_grid_step: f64,
    /// Policy used to choose between the normal and rotated orientation of a design
    #[serde(default)]
    pub scoring: ScoringPolicy,
    /// Number of randomly shuffled placement orders tried on top of the baseline
    pub n_iterations: usize,
    /// Whether the deterministic heuristic placement orders are tried as well
    pub heuristic_orders: bool,
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Wall-clock budget of a single top-level call in milliseconds. If undefined, there is no limit.
    /// It can be overshot by at most one row of the grid scan
    pub time_limit_ms: Option<u64>,
    /// Run the trials of the multi-start optimizer in parallel
    pub parallel: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl FFGConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_step.is_finite() && self.grid_step > 0.0,
            "grid_step must be positive, got {}",
            self.grid_step
        );
        ensure!(
            self.min_grid_step.is_finite() && self.min_grid_step > 0.0,
            "min_grid_step must be positive, got {}",
            self.min_grid_step
        );
        ensure!(
            self.min_grid_step <= self.grid_step,
            "min_grid_step ({}) must not exceed grid_step ({})",
            self.min_grid_step,
            self.grid_step
        );
        Ok(())
    }

    /// Step of the position grid for a sheet with the given `spacing`
    pub fn effective_step(&self, spacing: f64) -> f64 {
        f64::max(f64::min(self.grid_step, spacing), self.min_grid_step)
    }
}

impl Default for FFGConfig {
    fn default() -> Self {
        Self {
            grid_step: 5.0,
            min_grid_step: 0.5,
            scoring: ScoringPolicy::default(),
            n_iterations: 3,
            heuristic_orders: true,
            prng_seed: Some(0),
            time_limit_ms: None,
            parallel: true,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
