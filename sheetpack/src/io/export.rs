use crate::entities::{ArrangementResult, SheetInstance};
use crate::io::ext_repr::{ExtArrangementResult, ExtPlacedItem, ExtStatistics};

/// Exports a result out of the library
pub fn export(instance: &SheetInstance, result: &ArrangementResult) -> ExtArrangementResult {
    let arrangements = result
        .placements
        .iter()
        .map(|pi| {
            let item = instance.item(pi.item_idx);
            ExtPlacedItem {
                id: item.id.clone(),
                name: item.name.clone(),
                x: pi.x,
                y: pi.y,
                width: pi.width,
                height: pi.height,
                rotation: pi.rotation,
                original_width: pi.original_width,
                original_height: pi.original_height,
            }
        })
        .collect();

    ExtArrangementResult {
        arrangements,
        efficiency: result.efficiency(),
        total_arranged: result.total_arranged(),
        total_requested: result.total_requested(),
        statistics: ExtStatistics {
            rotated_items: result.stats.rotated_items,
            waste_area: result.stats.waste_area,
            utilization_rate: result.stats.utilization_rate,
        },
        unplaced_ids: result
            .unplaced
            .iter()
            .map(|&idx| instance.item(idx).id.clone())
            .collect(),
        terminated_early: result.terminated_early,
    }
}
