use crate::entities::{PlacedItem, SheetInstance};
use crate::stats::LayoutStats;

/// Outcome of a single packing run: where every placed design ended up,
/// which designs were left out, and the derived statistics.
#[derive(Clone, Debug)]
pub struct ArrangementResult {
    /// Placed designs, in the order they were placed
    pub placements: Vec<PlacedItem>,
    /// Indices of the designs that could not be placed
    pub unplaced: Vec<usize>,
    pub stats: LayoutStats,
    /// Set when the run was cut short by a deadline or cancellation,
    /// designs not yet attempted at that point are part of `unplaced`
    pub terminated_early: bool,
}

impl ArrangementResult {
    pub fn new(
        instance: &SheetInstance,
        placements: Vec<PlacedItem>,
        unplaced: Vec<usize>,
        terminated_early: bool,
    ) -> Self {
        debug_assert!(placements.len() + unplaced.len() <= instance.n_items());
        let stats = LayoutStats::compute(&placements, instance);
        Self {
            placements,
            unplaced,
            stats,
            terminated_early,
        }
    }

    pub fn efficiency(&self) -> f64 {
        self.stats.efficiency
    }

    pub fn total_arranged(&self) -> usize {
        self.placements.len()
    }

    pub fn total_requested(&self) -> usize {
        self.stats.n_requested
    }

    pub fn is_complete(&self) -> bool {
        self.total_arranged() == self.total_requested()
    }
}
