use crate::geometry::Rect;
use crate::geometry::geo_traits::CollidesWith;

/// Keeps track of the regions of the sheet that are already taken.
///
/// Every registered region is the footprint of a placed design, expanded by the spacing,
/// so a plain rectangle overlap query also enforces the minimum clearance.
/// Regions are only ever added: the tracker grows monotonically during a single packing run
/// and is discarded afterwards. It is never shared between runs.
#[derive(Debug, Clone, Default)]
pub struct OccupancyTracker {
    occupied: Vec<Rect>,
}

impl OccupancyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            occupied: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if `rect` overlaps (with positive area) any registered region.
    pub fn is_occupied(&self, rect: &Rect) -> bool {
        self.occupied.iter().any(|o| o.collides_with(rect))
    }

    pub fn add(&mut self, rect: Rect) {
        self.occupied.push(rect);
    }

    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_is_free_everywhere() {
        let tracker = OccupancyTracker::new();
        assert!(!tracker.is_occupied(&Rect::from_xywh(-1e6, -1e6, 2e6, 2e6)));
    }

    #[test]
    fn touching_regions_are_free() {
        let mut tracker = OccupancyTracker::new();
        tracker.add(Rect::from_xywh(0.0, 0.0, 60.0, 60.0));
        assert!(!tracker.is_occupied(&Rect::from_xywh(60.0, 0.0, 40.0, 40.0)));
        assert!(!tracker.is_occupied(&Rect::from_xywh(0.0, 60.0, 40.0, 40.0)));
        assert!(tracker.is_occupied(&Rect::from_xywh(59.0, 59.0, 40.0, 40.0)));
    }

    #[test]
    fn query_hits_any_region() {
        let mut tracker = OccupancyTracker::with_capacity(2);
        tracker.add(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
        tracker.add(Rect::from_xywh(100.0, 100.0, 10.0, 10.0));
        assert_eq!(tracker.len(), 2);
        assert!(tracker.is_occupied(&Rect::from_xywh(105.0, 95.0, 10.0, 10.0)));
        assert!(!tracker.is_occupied(&Rect::from_xywh(20.0, 20.0, 50.0, 50.0)));
    }
}
