use thiserror::Error;

/// Structural problems with a layout request.
/// These are detected before any placement is attempted and abort the request.
/// An item that simply does not fit on the sheet is *not* an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("sheet dimensions must be positive, got {width} x {height} mm")]
    NonPositiveSheetDimension { width: f64, height: f64 },

    #[error("margin must not be negative, got {0} mm")]
    NegativeMargin(f64),

    #[error("spacing must not be negative, got {0} mm")]
    NegativeSpacing(f64),

    #[error("margin of {margin} mm leaves no usable area on a {width} x {height} mm sheet")]
    MarginTooLarge { margin: f64, width: f64, height: f64 },

    #[error("design '{id}' must have positive dimensions, got {width} x {height} mm")]
    NonPositiveItemDimension { id: String, width: f64, height: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteValue { field: String },
}
