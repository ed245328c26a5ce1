use std::time::Instant;

use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sheetpack::entities::{ArrangementResult, SheetInstance};

use crate::config::FFGConfig;
use crate::opt::budget::Budget;
use crate::opt::order::{PlacementOrder, item_placement_order};
use crate::opt::packer::FFGPacker;

/// Outcome of a single trial of the [`MultiStartOptimizer`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialSummary {
    pub order: PlacementOrder,
    pub efficiency: f64,
    pub total_arranged: usize,
    pub terminated_early: bool,
}

#[derive(Clone, Debug)]
pub struct OptimizationReport {
    /// Best arrangement over all trials
    pub best: ArrangementResult,
    /// Placement order that produced `best`
    pub best_order: PlacementOrder,
    /// All trials that were executed, in trial order
    pub trials: Vec<TrialSummary>,
}

/// Runs the [`FFGPacker`] once per placement order and keeps the arrangement with the highest efficiency.
///
/// The first trial always uses [`PlacementOrder::AreaDescending`] and is executed regardless of the budget.
/// Trials are independent and can run in parallel, each one owns its packer.
pub struct MultiStartOptimizer<'a> {
    pub instance: &'a SheetInstance,
    pub config: FFGConfig,
    pub budget: Budget,
}

impl<'a> MultiStartOptimizer<'a> {
    pub fn new(instance: &'a SheetInstance, config: FFGConfig, budget: Budget) -> Self {
        Self {
            instance,
            config,
            budget,
        }
    }

    /// The placement orders tried by [`Self::optimize`], baseline first
    pub fn trial_orders(&self) -> Vec<PlacementOrder> {
        let base_seed = self.config.prng_seed.unwrap_or_else(rand::random::<u64>);

        let heuristics: &[PlacementOrder] = match self.config.heuristic_orders {
            true => PlacementOrder::HEURISTICS.as_slice(),
            false => &[],
        };
        let shuffles = (0..self.config.n_iterations as u64).map(|i| PlacementOrder::Shuffled {
            seed: base_seed.wrapping_add(i),
        });

        [PlacementOrder::AreaDescending]
            .into_iter()
            .chain(heuristics.iter().copied())
            .chain(shuffles)
            .collect_vec()
    }

    pub fn optimize(&self) -> OptimizationReport {
        let start = Instant::now();
        let orders = self.trial_orders();

        //baseline runs unconditionally, so there is always a result
        let (baseline_order, other_orders) = (orders[0], &orders[1..]);
        let baseline = self.run_trial(baseline_order);

        let others: Vec<(PlacementOrder, ArrangementResult)> = match self.config.parallel {
            true => other_orders
                .par_iter()
                .filter_map(|&order| self.try_trial(order))
                .collect(),
            false => other_orders
                .iter()
                .filter_map(|&order| self.try_trial(order))
                .collect(),
        };

        let trials = [(baseline_order, &baseline)]
            .into_iter()
            .chain(others.iter().map(|(o, r)| (*o, r)))
            .map(|(order, result)| TrialSummary {
                order,
                efficiency: result.efficiency(),
                total_arranged: result.total_arranged(),
                terminated_early: result.terminated_early,
            })
            .collect_vec();

        //strictly higher efficiency replaces the incumbent, ties go to the earliest trial
        let (best_order, best) = others.into_iter().fold(
            (baseline_order, baseline),
            |(inc_order, inc), (order, result)| match result.efficiency() > inc.efficiency() {
                true => (order, result),
                false => (inc_order, inc),
            },
        );

        info!(
            "[MULTI] best of {} trials: {}/{} designs placed with an efficiency of {:.2}% using {} order ({:.3}ms)",
            trials.len(),
            best.total_arranged(),
            best.total_requested(),
            best.efficiency(),
            best_order,
            start.elapsed().as_secs_f64() * 1000.0
        );

        OptimizationReport {
            best,
            best_order,
            trials,
        }
    }

    fn try_trial(&self, order: PlacementOrder) -> Option<(PlacementOrder, ArrangementResult)> {
        match self.budget.is_exhausted() {
            true => {
                debug!("[MULTI] budget exhausted, skipping trial with {order} order");
                None
            }
            false => Some((order, self.run_trial(order))),
        }
    }

    fn run_trial(&self, order: PlacementOrder) -> ArrangementResult {
        let sequence = item_placement_order(self.instance, order);
        let result = FFGPacker::new(self.instance, &self.config, &self.budget).pack_in_order(&sequence);
        debug!(
            "[MULTI] trial with {} order: {}/{} designs, efficiency {:.2}%",
            order,
            result.total_arranged(),
            result.total_requested(),
            result.efficiency()
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetpack::entities::{DesignItem, LayoutSettings};

    fn instance() -> SheetInstance {
        let items = (0..6)
            .map(|i| DesignItem::new(format!("d{i}"), format!("design {i}"), 40.0 + i as f64 * 7.0, 25.0, true))
            .collect_vec();
        SheetInstance::new(items, LayoutSettings::default()).unwrap()
    }

    #[test]
    fn trial_orders_start_with_baseline() {
        let instance = instance();
        let config = FFGConfig {
            n_iterations: 2,
            prng_seed: Some(10),
            ..FFGConfig::default()
        };
        let optimizer = MultiStartOptimizer::new(&instance, config, Budget::unlimited());
        let orders = optimizer.trial_orders();
        assert_eq!(orders.len(), 1 + PlacementOrder::HEURISTICS.len() + 2);
        assert_eq!(orders[0], PlacementOrder::AreaDescending);
        assert_eq!(orders[5], PlacementOrder::Shuffled { seed: 10 });
        assert_eq!(orders[6], PlacementOrder::Shuffled { seed: 11 });
    }

    #[test]
    fn exhausted_budget_only_runs_baseline() {
        let instance = instance();
        let budget = Budget::unlimited();
        budget.cancel_handle().cancel();
        let report = MultiStartOptimizer::new(&instance, FFGConfig::default(), budget).optimize();
        assert_eq!(report.trials.len(), 1);
        assert_eq!(report.best_order, PlacementOrder::AreaDescending);
        assert!(report.best.terminated_early);
        assert_eq!(report.best.unplaced.len(), instance.n_items());
    }
}
