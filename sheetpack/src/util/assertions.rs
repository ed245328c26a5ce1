use crate::entities::{ArrangementResult, SheetInstance};
use crate::geometry::Rotation;
use crate::geometry::geo_traits::{CollidesWith, Encloses};
use crate::util::{FPA, round2};
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of an arrangement
//Used in debug_assertion!() blocks and in tests

/// Checks every invariant a returned [`ArrangementResult`] has to satisfy.
pub fn arrangement_is_valid(result: &ArrangementResult, instance: &SheetInstance) -> bool {
    placements_within_margins(result, instance)
        && no_overlapping_placements(result, instance)
        && rotations_consistent(result, instance)
        && counts_consistent(result, instance)
        && efficiency_consistent(result, instance)
}

pub fn placements_within_margins(result: &ArrangementResult, instance: &SheetInstance) -> bool {
    let usable = instance.settings().usable_rect();
    for pi in &result.placements {
        if !usable.encloses(&pi.footprint()) {
            error!(
                "design {} at ({}, {}) with footprint {} x {} exceeds the usable area {:?}",
                instance.item(pi.item_idx).id,
                pi.x,
                pi.y,
                pi.width,
                pi.height,
                usable
            );
            return false;
        }
    }
    true
}

/// No two spacing-expanded footprints may overlap, touching is allowed.
pub fn no_overlapping_placements(result: &ArrangementResult, instance: &SheetInstance) -> bool {
    let spacing = instance.settings().spacing;
    for (a, b) in result.placements.iter().tuple_combinations() {
        if a.occupied_area(spacing).collides_with(&b.occupied_area(spacing)) {
            error!(
                "designs {} and {} overlap: {:?} and {:?}",
                instance.item(a.item_idx).id,
                instance.item(b.item_idx).id,
                a.footprint(),
                b.footprint()
            );
            return false;
        }
    }
    true
}

pub fn rotations_consistent(result: &ArrangementResult, instance: &SheetInstance) -> bool {
    result.placements.iter().all(|pi| {
        let item = instance.item(pi.item_idx);
        let original_ok = pi.original_width == item.width && pi.original_height == item.height;
        let footprint_ok = match pi.rotation {
            Rotation::Deg0 => pi.width == pi.original_width && pi.height == pi.original_height,
            Rotation::Deg90 => pi.width == pi.original_height && pi.height == pi.original_width,
        };
        let permission_ok = !pi.rotation.is_rotated() || instance.rotation_allowed(pi.item_idx);
        original_ok && footprint_ok && permission_ok
    })
}

/// Every design is either placed or unplaced, exactly once.
pub fn counts_consistent(result: &ArrangementResult, instance: &SheetInstance) -> bool {
    let all_idxs = result
        .placements
        .iter()
        .map(|pi| pi.item_idx)
        .chain(result.unplaced.iter().copied())
        .sorted()
        .collect_vec();

    all_idxs == (0..instance.n_items()).collect_vec()
        && result.stats.n_placed == result.placements.len()
        && result.stats.n_requested == instance.n_items()
        && result.stats.rotated_items
            == result
                .placements
                .iter()
                .filter(|pi| pi.rotation.is_rotated())
                .count()
}

/// Recomputes the efficiency from the placements and compares it with the reported one.
pub fn efficiency_consistent(result: &ArrangementResult, instance: &SheetInstance) -> bool {
    let used_area = result
        .placements
        .iter()
        .map(|pi| pi.original_width * pi.original_height)
        .sum::<f64>();
    let efficiency = round2(100.0 * used_area / instance.settings().usable_area());

    FPA(efficiency) == FPA(result.efficiency())
}
