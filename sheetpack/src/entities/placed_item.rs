use crate::entities::DesignItem;
use crate::geometry::{Rect, Rotation};

/// A design that has been placed on the sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem {
    /// Index of the design in the [`SheetInstance`](crate::entities::SheetInstance)
    pub item_idx: usize,
    /// x-coordinate of the top-left corner of the footprint
    pub x: f64,
    /// y-coordinate of the top-left corner of the footprint (y increases downward)
    pub y: f64,
    pub rotation: Rotation,
    /// Width of the footprint, after rotation
    pub width: f64,
    /// Height of the footprint, after rotation
    pub height: f64,
    pub original_width: f64,
    pub original_height: f64,
}

impl PlacedItem {
    pub fn new(item_idx: usize, item: &DesignItem, x: f64, y: f64, rotation: Rotation) -> Self {
        let (width, height) = item.footprint(rotation);
        Self {
            item_idx,
            x,
            y,
            rotation,
            width,
            height,
            original_width: item.width,
            original_height: item.height,
        }
    }

    pub fn footprint(&self) -> Rect {
        Rect::from_xywh(self.x, self.y, self.width, self.height)
    }

    /// Footprint expanded by `spacing` on all sides, the region registered as occupied.
    pub fn occupied_area(&self, spacing: f64) -> Rect {
        self.footprint().inflate(spacing)
    }

    pub fn area(&self) -> f64 {
        self.original_width * self.original_height
    }
}
