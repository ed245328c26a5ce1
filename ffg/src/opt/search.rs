use sheetpack::entities::LayoutSettings;
use sheetpack::geometry::Rect;
use sheetpack::occupancy::OccupancyTracker;
use sheetpack::util::FPA;

use crate::opt::budget::Budget;

/// First-fit scan of the usable area for a free spot for a `width` x `height` footprint.
///
/// Candidate top-left corners lie on a grid with spacing `step`, anchored at (`margin`, `margin`).
/// Rows are scanned top to bottom, each row left to right, and the first candidate whose
/// spacing-expanded footprint does not overlap any occupied region is returned.
/// Returns `None` if no candidate within the margins is free, or if `budget` runs out.
/// The budget is checked once per row.
pub fn search(
    width: f64,
    height: f64,
    settings: &LayoutSettings,
    tracker: &OccupancyTracker,
    step: f64,
    budget: &Budget,
    probe_counter: &mut usize,
) -> Option<Rect> {
    debug_assert!(step > 0.0);
    let usable = settings.usable_rect();

    let x_end = usable.x_max - width;
    let y_end = usable.y_max - height;
    if FPA(x_end) < FPA(usable.x_min) || FPA(y_end) < FPA(usable.y_min) {
        //does not fit within the margins, not even on an empty sheet
        return None;
    }
    let x_end = f64::max(x_end, usable.x_min);
    let y_end = f64::max(y_end, usable.y_min);

    for y in axis_positions(usable.y_min, y_end, step) {
        if budget.is_exhausted() {
            return None;
        }
        for x in axis_positions(usable.x_min, x_end, step) {
            *probe_counter += 1;
            let footprint = Rect::from_xywh(x, y, width, height);
            if !tracker.is_occupied(&footprint.inflate(settings.spacing)) {
                return Some(footprint);
            }
        }
    }
    None
}

/// Positions `start`, `start + step`, ... up to `end`.
/// A position overshooting `end` by less than the float tolerance is snapped to `end`.
fn axis_positions(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    (0..)
        .map(move |i| start + i as f64 * step)
        .take_while(move |&p| FPA(p) <= FPA(end))
        .map(move |p| f64::min(p, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(margin: f64, spacing: f64) -> LayoutSettings {
        LayoutSettings {
            sheet_width: 100.0,
            sheet_height: 100.0,
            margin,
            spacing,
            allow_rotation: true,
            optimize_for_waste: true,
        }
    }

    #[test]
    fn empty_sheet_yields_margin_corner() {
        let s = settings(5.0, 3.0);
        let mut probes = 0;
        let fp = search(20.0, 10.0, &s, &OccupancyTracker::new(), 3.0, &Budget::unlimited(), &mut probes).unwrap();
        assert_eq!((fp.x_min, fp.y_min), (5.0, 5.0));
        assert_eq!(probes, 1);
    }

    #[test]
    fn scan_is_row_major() {
        let s = settings(0.0, 0.0);
        let mut tracker = OccupancyTracker::new();
        tracker.add(Rect::from_xywh(0.0, 0.0, 50.0, 50.0));
        let mut probes = 0;
        let fp = search(50.0, 50.0, &s, &tracker, 5.0, &Budget::unlimited(), &mut probes).unwrap();
        //the first free spot in the top row wins over the one below the occupied block
        assert_eq!((fp.x_min, fp.y_min), (50.0, 0.0));
    }

    #[test]
    fn spacing_is_enforced_on_both_sides() {
        let s = settings(0.0, 2.0);
        let mut tracker = OccupancyTracker::new();
        tracker.add(Rect::from_xywh(0.0, 0.0, 10.0, 100.0).inflate(2.0));
        let mut probes = 0;
        let fp = search(10.0, 10.0, &s, &tracker, 2.0, &Budget::unlimited(), &mut probes).unwrap();
        assert_eq!(fp.x_min, 14.0);
    }

    #[test]
    fn oversized_footprint_is_rejected_without_probing() {
        let s = settings(5.0, 0.0);
        let mut probes = 0;
        assert!(search(91.0, 10.0, &s, &OccupancyTracker::new(), 1.0, &Budget::unlimited(), &mut probes).is_none());
        assert_eq!(probes, 0);
    }

    #[test]
    fn exact_fit_is_found() {
        let s = settings(5.0, 0.0);
        let mut probes = 0;
        let fp = search(90.0, 90.0, &s, &OccupancyTracker::new(), 5.0, &Budget::unlimited(), &mut probes).unwrap();
        assert_eq!((fp.x_min, fp.y_min), (5.0, 5.0));
    }

    #[test]
    fn exhausted_budget_stops_the_scan() {
        let s = settings(0.0, 0.0);
        let mut tracker = OccupancyTracker::new();
        tracker.add(Rect::from_xywh(0.0, 0.0, 100.0, 95.0));
        let budget = Budget::unlimited();
        budget.cancel_handle().cancel();

        let mut probes = 0;
        assert!(search(5.0, 5.0, &s, &tracker, 1.0, &budget, &mut probes).is_none());
        assert_eq!(probes, 0);

        //the same scan runs to the free bottom row with budget left
        let fp = search(5.0, 5.0, &s, &tracker, 1.0, &Budget::unlimited(), &mut probes).unwrap();
        assert_eq!((fp.x_min, fp.y_min), (0.0, 95.0));
        assert!(probes > 95);
    }

    #[test]
    fn last_grid_position_is_snapped_to_the_edge() {
        let positions = axis_positions(0.0, 0.3, 0.1).collect::<Vec<_>>();
        assert_eq!(positions.len(), 4);
        assert_eq!(positions[3], 0.3);
    }
}
