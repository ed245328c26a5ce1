use serde::{Deserialize, Serialize};
use sheetpack::entities::LayoutSettings;
use sheetpack::geometry::Rect;

/// Gaps to the right or below a design narrower than this are considered unusable (mm).
const MIN_USABLE_GAP: f64 = 25.0;
const GAP_PENALTY: f64 = 50.0;
const EDGE_DISTANCE_WEIGHT: f64 = 0.1;

/// Scores a candidate footprint on the sheet, used to choose between the
/// normal and rotated placement of the same design. Higher is better.
pub trait PlacementScorer {
    fn score(&self, footprint: &Rect, settings: &LayoutSettings) -> f64;
}

/// Distance from `footprint` to the nearest edge of the usable area, per axis.
fn edge_distances(footprint: &Rect, settings: &LayoutSettings) -> (f64, f64) {
    let usable = settings.usable_rect();
    let dx = f64::min(
        footprint.x_min - usable.x_min,
        usable.x_max - footprint.x_max,
    );
    let dy = f64::min(
        footprint.y_min - usable.y_min,
        usable.y_max - footprint.y_max,
    );
    (dx, dy)
}

/// Rewards footprints far away from the nearest edge of the usable area.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeDistance;

impl PlacementScorer for EdgeDistance {
    fn score(&self, footprint: &Rect, settings: &LayoutSettings) -> f64 {
        let (dx, dy) = edge_distances(footprint, settings);
        f64::max(0.0, f64::min(dx, dy))
    }
}

/// Rewards footprints close to an edge of the usable area that do not leave
/// narrow, unusable gaps to the right or below them.
#[derive(Clone, Copy, Debug, Default)]
pub struct GapPenalty;

impl PlacementScorer for GapPenalty {
    fn score(&self, footprint: &Rect, settings: &LayoutSettings) -> f64 {
        let usable = settings.usable_rect();
        let (dx, dy) = edge_distances(footprint, settings);
        let mut waste = EDGE_DISTANCE_WEIGHT * f64::max(0.0, f64::min(dx, dy));

        let right_gap = usable.x_max - footprint.x_max;
        if right_gap > 0.0 && right_gap < MIN_USABLE_GAP {
            waste += GAP_PENALTY;
        }
        let bottom_gap = usable.y_max - footprint.y_max;
        if bottom_gap > 0.0 && bottom_gap < MIN_USABLE_GAP {
            waste += GAP_PENALTY;
        }
        -waste
    }
}

/// Selectable [`PlacementScorer`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringPolicy {
    #[default]
    EdgeDistance,
    GapPenalty,
}

impl PlacementScorer for ScoringPolicy {
    fn score(&self, footprint: &Rect, settings: &LayoutSettings) -> f64 {
        match self {
            ScoringPolicy::EdgeDistance => EdgeDistance.score(footprint, settings),
            ScoringPolicy::GapPenalty => GapPenalty.score(footprint, settings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> LayoutSettings {
        LayoutSettings {
            sheet_width: 200.0,
            sheet_height: 100.0,
            margin: 0.0,
            spacing: 0.0,
            allow_rotation: true,
            optimize_for_waste: true,
        }
    }

    #[test]
    fn edge_distance_uses_nearest_edge() {
        let s = settings();
        assert_eq!(EdgeDistance.score(&Rect::from_xywh(0.0, 0.0, 50.0, 50.0), &s), 0.0);
        assert_eq!(EdgeDistance.score(&Rect::from_xywh(40.0, 20.0, 50.0, 50.0), &s), 20.0);
        assert_eq!(EdgeDistance.score(&Rect::from_xywh(40.0, 30.0, 50.0, 50.0), &s), 20.0);
    }

    #[test]
    fn gap_penalty_punishes_slivers() {
        let s = settings();
        //leaves a 10mm gap to the right
        let sliver = Rect::from_xywh(0.0, 0.0, 190.0, 100.0);
        let flush = Rect::from_xywh(0.0, 0.0, 200.0, 100.0);
        assert_eq!(GapPenalty.score(&sliver, &s), -50.0);
        assert_eq!(GapPenalty.score(&flush, &s), 0.0);
        assert!(ScoringPolicy::GapPenalty.score(&flush, &s) > ScoringPolicy::GapPenalty.score(&sliver, &s));
    }
}
