use serde::{Deserialize, Serialize};

use crate::entities::Priority;
use crate::geometry::Rotation;

/// A complete layout request: the designs and the sheet settings
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtLayoutRequest {
    /// Optional name, used to label outputs
    #[serde(default)]
    pub name: Option<String>,
    pub items: Vec<ExtDesignItem>,
    pub settings: ExtLayoutSettings,
}

/// External representation of a design
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtDesignItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Width in mm
    pub width: f64,
    /// Height in mm
    pub height: f64,
    /// Designs are rotatable unless stated otherwise
    #[serde(default = "default_true")]
    pub can_rotate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// External representation of the sheet settings
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtLayoutSettings {
    pub sheet_width: f64,
    pub sheet_height: f64,
    #[serde(default)]
    pub margin: f64,
    #[serde(default)]
    pub spacing: f64,
    #[serde(default = "default_true")]
    pub allow_rotation: bool,
    #[serde(default = "default_true")]
    pub optimize_for_waste: bool,
}

/// External representation of the outcome of a layout request
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtArrangementResult {
    pub arrangements: Vec<ExtPlacedItem>,
    /// Percentage of the usable area covered by designs (0..100, two decimals)
    pub efficiency: f64,
    pub total_arranged: usize,
    pub total_requested: usize,
    pub statistics: ExtStatistics,
    /// Ids of the designs that could not be placed
    pub unplaced_ids: Vec<String>,
    /// Whether the run was cut short by a time budget or cancellation
    pub terminated_early: bool,
}

/// External representation of a placed design.
/// `x` and `y` are the top-left corner of the rotated footprint, relative to the top-left
/// corner of the sheet, with y increasing downward.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtPlacedItem {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: Rotation,
    pub original_width: f64,
    pub original_height: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtStatistics {
    pub rotated_items: usize,
    /// Usable area not covered by designs (mm²)
    pub waste_area: f64,
    /// Percentage of the requested designs that were placed
    pub utilization_rate: u32,
}

fn default_true() -> bool {
    true
}
