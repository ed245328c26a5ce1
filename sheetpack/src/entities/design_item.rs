use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::geometry::Rotation;

/// Area (mm²) above which a design without an explicit priority is considered high priority.
const HIGH_PRIORITY_AREA: f64 = 2000.0;

/// Aspect ratios outside of this range make a design a candidate for rotation.
const ROTATION_ASPECT_RANGE: (f64, f64) = (0.7, 1.5);

/// Placement priority of a design, used by the priority-based placement order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A rectangular design that has to be placed on the sheet.
/// Immutable once part of a [`SheetInstance`](crate::entities::SheetInstance).
#[derive(Clone, Debug, PartialEq)]
pub struct DesignItem {
    pub id: String,
    pub name: String,
    /// Width in mm, always > 0
    pub width: f64,
    /// Height in mm, always > 0
    pub height: f64,
    /// Whether this design may be placed rotated by 90°
    pub can_rotate: bool,
    /// Explicit priority, derived from the area if undefined
    pub priority: Option<Priority>,
    /// Explicit grouping tag, derived from the name if undefined
    pub group: Option<String>,
}

impl DesignItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        width: f64,
        height: f64,
        can_rotate: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width,
            height,
            can_rotate,
            priority: None,
            group: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(LayoutError::NonFiniteValue {
                field: format!("dimensions of design '{}'", self.id),
            });
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LayoutError::NonPositiveItemDimension {
                id: self.id.clone(),
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn longest_side(&self) -> f64 {
        f64::max(self.width, self.height)
    }

    /// Dimensions (width, height) of the design's footprint under `rotation`.
    pub fn footprint(&self, rotation: Rotation) -> (f64, f64) {
        rotation.apply(self.width, self.height)
    }

    pub fn priority(&self) -> Priority {
        match self.priority {
            Some(p) => p,
            None if self.area() > HIGH_PRIORITY_AREA => Priority::High,
            None => Priority::Medium,
        }
    }

    pub fn group(&self) -> Option<&str> {
        match &self.group {
            Some(g) => Some(g.as_str()),
            None if self.name.to_lowercase().contains("logo") => Some("logo"),
            None => None,
        }
    }

    /// Elongated, rotatable designs are the ones most likely to benefit from a rotation.
    pub fn rotation_recommended(&self) -> bool {
        let aspect_ratio = self.width / self.height;
        let (low, high) = ROTATION_ASPECT_RANGE;
        self.can_rotate && (aspect_ratio > high || aspect_ratio < low)
    }
}
