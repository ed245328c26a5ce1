//! First-fit grid (FFG) packing of rectangular designs onto a single print sheet,
//! built on top of [`sheetpack`].
//!
//! [`pack`] performs a single greedy pass, largest design first.
//! [`optimize`] repeats that pass over several placement orders and keeps the best arrangement.

use std::sync::LazyLock;
use std::time::Instant;

use sheetpack::entities::{ArrangementResult, DesignItem, LayoutSettings, SheetInstance};
use sheetpack::error::LayoutError;

use crate::config::FFGConfig;
use crate::opt::budget::Budget;
use crate::opt::multi_start::{MultiStartOptimizer, OptimizationReport};
use crate::opt::packer::FFGPacker;

pub mod config;
pub mod io;
pub mod opt;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Arranges `items` on the sheet described by `settings` in a single greedy pass.
pub fn pack(items: Vec<DesignItem>, settings: LayoutSettings) -> Result<ArrangementResult, LayoutError> {
    let instance = SheetInstance::new(items, settings)?;
    let config = FFGConfig::default();
    let budget = Budget::unlimited();
    Ok(FFGPacker::new(&instance, &config, &budget).pack())
}

/// Arranges `items` with the multi-start optimizer, trying `max_iterations` shuffled
/// placement orders next to the baseline and heuristic orders.
pub fn optimize(
    items: Vec<DesignItem>,
    settings: LayoutSettings,
    max_iterations: usize,
) -> Result<OptimizationReport, LayoutError> {
    let instance = SheetInstance::new(items, settings)?;
    let config = FFGConfig {
        n_iterations: max_iterations,
        ..FFGConfig::default()
    };
    let budget = Budget::from_config(&config);
    Ok(MultiStartOptimizer::new(&instance, config, budget).optimize())
}
