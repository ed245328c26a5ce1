use crate::geometry::geo_traits::{CollidesWith, Encloses};
use crate::util::FPA;
use anyhow::Result;
use anyhow::ensure;

/// Axis-aligned rectangle in sheet coordinates (millimeters).
/// The origin is the top-left corner of the sheet and y increases downward,
/// so (`x_min`, `y_min`) is the top-left corner of the rectangle.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle with its top-left corner at (`x`, `y`).
    /// `width` and `height` are expected to be non-negative.
    #[inline(always)]
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0);
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    /// Expands `self` by `spacing` on all sides. Never degenerate for `spacing >= 0`.
    #[inline(always)]
    pub fn inflate(self, spacing: f64) -> Self {
        debug_assert!(spacing >= 0.0);
        Rect {
            x_min: self.x_min - spacing,
            y_min: self.y_min - spacing,
            x_max: self.x_max + spacing,
            y_max: self.y_max + spacing,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

impl CollidesWith<Rect> for Rect {
    /// Two rectangles collide if their intersection has a positive area.
    /// Rectangles that only share (part of) an edge or a corner do not collide.
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        !(self.x_min >= other.x_max
            || self.x_max <= other.x_min
            || self.y_min >= other.y_max
            || self.y_max <= other.y_min)
    }
}

impl Encloses<Rect> for Rect {
    /// Containment with a tolerance for floating point precision on every bound.
    #[inline(always)]
    fn encloses(&self, other: &Rect) -> bool {
        FPA(self.x_min) <= FPA(other.x_min)
            && FPA(self.y_min) <= FPA(other.y_min)
            && FPA(self.x_max) >= FPA(other.x_max)
            && FPA(self.y_max) >= FPA(other.y_max)
    }
}
