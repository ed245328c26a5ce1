use crate::entities::{PlacedItem, SheetInstance};
use crate::util::round2;

/// Utilization statistics derived from a set of placed designs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutStats {
    /// Percentage of the usable sheet area covered by designs, rounded to two decimals
    pub efficiency: f64,
    /// Sum of the areas of the placed designs (mm²)
    pub used_area: f64,
    /// Area of the sheet inside the margins (mm²)
    pub usable_area: f64,
    /// Usable area not covered by any design (mm²)
    pub waste_area: f64,
    /// Number of designs placed with a 90° rotation
    pub rotated_items: usize,
    /// Percentage of the requested designs that were placed, rounded to an integer
    pub utilization_rate: u32,
    pub n_placed: usize,
    pub n_requested: usize,
}

impl LayoutStats {
    pub fn compute(placements: &[PlacedItem], instance: &SheetInstance) -> Self {
        let usable_area = instance.settings().usable_area();
        let used_area = placements.iter().map(|pi| pi.area()).sum::<f64>();
        let rotated_items = placements
            .iter()
            .filter(|pi| pi.rotation.is_rotated())
            .count();

        let n_placed = placements.len();
        let n_requested = instance.n_items();

        //an empty request has nothing to utilize
        let utilization_rate = match n_requested {
            0 => 0,
            n => (100.0 * n_placed as f64 / n as f64).round() as u32,
        };

        Self {
            efficiency: round2(100.0 * used_area / usable_area),
            used_area,
            usable_area,
            waste_area: usable_area - used_area,
            rotated_items,
            utilization_rate,
            n_placed,
            n_requested,
        }
    }
}
