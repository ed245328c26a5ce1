use std::time::Instant;

use log::{debug, info, warn};
use sheetpack::entities::{ArrangementResult, PlacedItem, SheetInstance};
use sheetpack::geometry::{Rect, Rotation};
use sheetpack::occupancy::OccupancyTracker;
use sheetpack::util::assertions;
use thousands::Separable;

use crate::config::FFGConfig;
use crate::opt::budget::Budget;
use crate::opt::order::{PlacementOrder, item_placement_order};
use crate::opt::score::{PlacementScorer, ScoringPolicy};
use crate::opt::search::search;

/// First-Fit Grid (FFG) packer: places designs one by one at the first free grid position,
/// choosing between the normal and rotated orientation with a [`PlacementScorer`].
///
/// All mutable state of a packing run lives in the packer itself, and `pack*` consumes it,
/// so a packer cannot be reused and concurrent runs never share any state.
pub struct FFGPacker<'a, S: PlacementScorer = ScoringPolicy> {
    instance: &'a SheetInstance,
    scorer: S,
    budget: &'a Budget,
    step: f64,
    tracker: OccupancyTracker,
    placements: Vec<PlacedItem>,
    unplaced: Vec<usize>,
    pub probe_counter: usize,
}

impl<'a> FFGPacker<'a, ScoringPolicy> {
    pub fn new(instance: &'a SheetInstance, config: &FFGConfig, budget: &'a Budget) -> Self {
        Self::with_scorer(instance, config, budget, config.scoring)
    }
}

impl<'a, S: PlacementScorer> FFGPacker<'a, S> {
    pub fn with_scorer(
        instance: &'a SheetInstance,
        config: &FFGConfig,
        budget: &'a Budget,
        scorer: S,
    ) -> Self {
        let step = config.effective_step(instance.settings().spacing);
        Self {
            instance,
            scorer,
            budget,
            step,
            tracker: OccupancyTracker::with_capacity(instance.n_items()),
            placements: Vec::with_capacity(instance.n_items()),
            unplaced: vec![],
            probe_counter: 0,
        }
    }

    /// Packs all designs, largest area first.
    pub fn pack(self) -> ArrangementResult {
        let order = item_placement_order(self.instance, PlacementOrder::AreaDescending);
        self.pack_in_order(&order)
    }

    /// Packs all designs in the given order. `order` has to be a permutation of the design indices.
    pub fn pack_in_order(mut self, order: &[usize]) -> ArrangementResult {
        debug_assert!({
            let mut sorted = order.to_vec();
            sorted.sort_unstable();
            sorted == (0..self.instance.n_items()).collect::<Vec<_>>()
        });
        let start = Instant::now();
        let mut terminated_early = false;

        for (i, &item_idx) in order.iter().enumerate() {
            if self.budget.is_exhausted() {
                warn!(
                    "[FFG] budget exhausted, {} of {} designs were not attempted",
                    order.len() - i,
                    order.len()
                );
                self.unplaced.extend_from_slice(&order[i..]);
                terminated_early = true;
                break;
            }
            match self.find_placement(item_idx) {
                Some(placed_item) => self.commit(placed_item),
                None if self.budget.is_exhausted() => {
                    warn!(
                        "[FFG] budget exhausted during the grid scan, {} of {} designs were not placed",
                        order.len() - i,
                        order.len()
                    );
                    self.unplaced.extend_from_slice(&order[i..]);
                    terminated_early = true;
                    break;
                }
                None => {
                    let item = self.instance.item(item_idx);
                    debug!(
                        "[FFG] could not place design {} ({} x {} mm)",
                        item.id, item.width, item.height
                    );
                    self.unplaced.push(item_idx);
                }
            }
        }

        let result = ArrangementResult::new(
            self.instance,
            self.placements,
            self.unplaced,
            terminated_early,
        );
        debug_assert!(assertions::arrangement_is_valid(&result, self.instance));

        info!(
            "[FFG] placed {}/{} designs ({} unplaced) with an efficiency of {:.2}% in {:.3}ms ({} probes)",
            result.total_arranged(),
            result.total_requested(),
            result.unplaced.len(),
            result.efficiency(),
            start.elapsed().as_secs_f64() * 1000.0,
            self.probe_counter.separate_with_commas()
        );
        result
    }

    /// Searches a position for the design in every permitted orientation and picks the best one.
    fn find_placement(&mut self, item_idx: usize) -> Option<PlacedItem> {
        let item = self.instance.item(item_idx);
        let settings = self.instance.settings();

        let rotations: &[Rotation] = match self.instance.rotation_allowed(item_idx)
            && item.width != item.height
        {
            true => &Rotation::ALL,
            false => &[Rotation::Deg0],
        };

        let mut best: Option<(Rotation, Rect, f64)> = None;
        for &rotation in rotations {
            let (width, height) = item.footprint(rotation);
            if !settings.fits_usable(width, height) {
                continue;
            }
            let Some(footprint) = search(
                width,
                height,
                settings,
                &self.tracker,
                self.step,
                self.budget,
                &mut self.probe_counter,
            ) else {
                continue;
            };

            let score = self.scorer.score(&footprint, settings);
            //ties are won by the earlier (unrotated) orientation
            if best.is_none_or(|(_, _, best_score)| score > best_score) {
                best = Some((rotation, footprint, score));
            }
        }

        best.map(|(rotation, footprint, _)| {
            PlacedItem::new(item_idx, item, footprint.x_min, footprint.y_min, rotation)
        })
    }

    fn commit(&mut self, placed_item: PlacedItem) {
        let spacing = self.instance.settings().spacing;
        self.tracker.add(placed_item.occupied_area(spacing));
        debug!(
            "[FFG] placed design {} at ({:.2}, {:.2}) with rotation {}",
            self.instance.item(placed_item.item_idx).id,
            placed_item.x,
            placed_item.y,
            placed_item.rotation
        );
        self.placements.push(placed_item);
    }
}
