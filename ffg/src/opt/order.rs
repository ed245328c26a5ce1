use std::cmp::Reverse;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ordered_float::OrderedFloat;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use sheetpack::entities::SheetInstance;

/// Order in which the designs of an instance are offered to the packer.
/// All deterministic orders are stable: designs with equal keys keep their input order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementOrder {
    /// Largest area first
    AreaDescending,
    /// Highest priority first, then largest area
    Priority,
    /// Designs sharing a grouping tag next to each other, untagged designs last
    Grouping,
    /// Designs that benefit from rotation first, then largest area
    RotationAffinity,
    /// Longest side first, then largest area
    LongestSide,
    /// Uniformly random permutation
    Shuffled { seed: u64 },
}

impl PlacementOrder {
    /// The deterministic alternatives to [`PlacementOrder::AreaDescending`]
    pub const HEURISTICS: [PlacementOrder; 4] = [
        PlacementOrder::Priority,
        PlacementOrder::Grouping,
        PlacementOrder::RotationAffinity,
        PlacementOrder::LongestSide,
    ];
}

impl Display for PlacementOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementOrder::AreaDescending => write!(f, "area"),
            PlacementOrder::Priority => write!(f, "priority"),
            PlacementOrder::Grouping => write!(f, "grouping"),
            PlacementOrder::RotationAffinity => write!(f, "rotation"),
            PlacementOrder::LongestSide => write!(f, "longest side"),
            PlacementOrder::Shuffled { seed } => write!(f, "shuffled (seed: {seed})"),
        }
    }
}

/// Returns the indices of all designs in `instance`, in the sequence dictated by `order`.
pub fn item_placement_order(instance: &SheetInstance, order: PlacementOrder) -> Vec<usize> {
    let items = instance.items();
    let area = |i: usize| Reverse(OrderedFloat(items[i].area()));
    let idxs = 0..items.len();

    match order {
        PlacementOrder::AreaDescending => idxs.sorted_by_cached_key(|&i| area(i)).collect_vec(),
        PlacementOrder::Priority => idxs
            .sorted_by_cached_key(|&i| (Reverse(items[i].priority()), area(i)))
            .collect_vec(),
        PlacementOrder::Grouping => idxs
            .sorted_by_cached_key(|&i| {
                let group = items[i].group().map(str::to_owned);
                (group.is_none(), group, area(i))
            })
            .collect_vec(),
        PlacementOrder::RotationAffinity => idxs
            .sorted_by_cached_key(|&i| (Reverse(items[i].rotation_recommended()), area(i)))
            .collect_vec(),
        PlacementOrder::LongestSide => idxs
            .sorted_by_cached_key(|&i| (Reverse(OrderedFloat(items[i].longest_side())), area(i)))
            .collect_vec(),
        PlacementOrder::Shuffled { seed } => {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut order = idxs.collect_vec();
            order.shuffle(&mut rng);
            order
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetpack::entities::{DesignItem, LayoutSettings, Priority};

    fn instance() -> SheetInstance {
        let items = vec![
            DesignItem::new("small", "small", 10.0, 10.0, true),
            DesignItem::new("wide", "wide banner", 100.0, 25.0, true),
            DesignItem::new("logo", "Logo", 30.0, 30.0, true).with_priority(Priority::Low),
            DesignItem::new("tie", "tie", 20.0, 5.0, false).with_group("a"),
            DesignItem::new("tie2", "tie2", 5.0, 20.0, true).with_group("a"),
        ];
        SheetInstance::new(items, LayoutSettings::default()).unwrap()
    }

    #[test]
    fn area_descending_is_stable() {
        assert_eq!(
            item_placement_order(&instance(), PlacementOrder::AreaDescending),
            vec![1, 2, 0, 3, 4]
        );
    }

    #[test]
    fn priority_first() {
        //"wide" is derived as high priority, "logo" is explicitly low
        assert_eq!(
            item_placement_order(&instance(), PlacementOrder::Priority),
            vec![1, 0, 3, 4, 2]
        );
    }

    #[test]
    fn tagged_groups_first() {
        assert_eq!(
            item_placement_order(&instance(), PlacementOrder::Grouping),
            vec![3, 4, 2, 1, 0]
        );
    }

    #[test]
    fn rotation_candidates_first() {
        //"tie" is elongated but not rotatable
        assert_eq!(
            item_placement_order(&instance(), PlacementOrder::RotationAffinity),
            vec![1, 4, 2, 0, 3]
        );
    }

    #[test]
    fn longest_side_first() {
        assert_eq!(
            item_placement_order(&instance(), PlacementOrder::LongestSide),
            vec![1, 2, 3, 4, 0]
        );
    }

    #[test]
    fn shuffle_is_a_seeded_permutation() {
        let instance = instance();
        let a = item_placement_order(&instance, PlacementOrder::Shuffled { seed: 7 });
        let b = item_placement_order(&instance, PlacementOrder::Shuffled { seed: 7 });
        assert_eq!(a, b);
        assert_eq!(a.iter().copied().sorted().collect_vec(), vec![0, 1, 2, 3, 4]);
    }
}
