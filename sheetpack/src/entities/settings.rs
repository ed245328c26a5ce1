use crate::error::LayoutError;
use crate::geometry::Rect;

/// Description of the print sheet and the rules every placement has to respect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSettings {
    /// Width of the sheet in mm
    pub sheet_width: f64,
    /// Height of the sheet in mm
    pub sheet_height: f64,
    /// Uniform border on all four sides of the sheet where nothing can be placed
    pub margin: f64,
    /// Clearance added around every placed design
    pub spacing: f64,
    /// Global switch for 90° rotations, designs must also allow it individually
    pub allow_rotation: bool,
    /// Carried through from the request, orientation is always chosen by scoring both candidates
    pub optimize_for_waste: bool,
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            ("sheet width", self.sheet_width),
            ("sheet height", self.sheet_height),
            ("margin", self.margin),
            ("spacing", self.spacing),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LayoutError::NonFiniteValue {
                field: field.to_string(),
            });
        }
        if self.sheet_width <= 0.0 || self.sheet_height <= 0.0 {
            return Err(LayoutError::NonPositiveSheetDimension {
                width: self.sheet_width,
                height: self.sheet_height,
            });
        }
        if self.margin < 0.0 {
            return Err(LayoutError::NegativeMargin(self.margin));
        }
        if self.spacing < 0.0 {
            return Err(LayoutError::NegativeSpacing(self.spacing));
        }
        if 2.0 * self.margin >= self.sheet_width || 2.0 * self.margin >= self.sheet_height {
            return Err(LayoutError::MarginTooLarge {
                margin: self.margin,
                width: self.sheet_width,
                height: self.sheet_height,
            });
        }
        Ok(())
    }

    pub fn usable_width(&self) -> f64 {
        self.sheet_width - 2.0 * self.margin
    }

    pub fn usable_height(&self) -> f64 {
        self.sheet_height - 2.0 * self.margin
    }

    pub fn usable_area(&self) -> f64 {
        self.usable_width() * self.usable_height()
    }

    /// The region of the sheet inside the margins.
    pub fn usable_rect(&self) -> Rect {
        Rect::from_xywh(
            self.margin,
            self.margin,
            self.usable_width(),
            self.usable_height(),
        )
    }

    pub fn sheet_rect(&self) -> Rect {
        Rect::from_xywh(0.0, 0.0, self.sheet_width, self.sheet_height)
    }

    /// Whether a footprint of `width` x `height` fits inside the usable area at all.
    pub fn fits_usable(&self, width: f64, height: f64) -> bool {
        width <= self.usable_width() && height <= self.usable_height()
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            sheet_width: 330.0,
            sheet_height: 480.0,
            margin: 5.0,
            spacing: 3.0,
            allow_rotation: true,
            optimize_for_waste: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn settings(sheet_width: f64, sheet_height: f64, margin: f64, spacing: f64) -> LayoutSettings {
        LayoutSettings {
            sheet_width,
            sheet_height,
            margin,
            spacing,
            ..LayoutSettings::default()
        }
    }

    #[test]
    fn default_is_valid() {
        let s = LayoutSettings::default();
        assert_eq!(s.validate(), Ok(()));
        assert_eq!(s.usable_area(), 320.0 * 470.0);
    }

    #[test_case(settings(0.0, 100.0, 0.0, 0.0); "zero width")]
    #[test_case(settings(100.0, -5.0, 0.0, 0.0); "negative height")]
    #[test_case(settings(100.0, 100.0, -1.0, 0.0); "negative margin")]
    #[test_case(settings(100.0, 100.0, 0.0, -1.0); "negative spacing")]
    #[test_case(settings(100.0, 300.0, 50.0, 0.0); "margin is half of width")]
    #[test_case(settings(f64::INFINITY, 300.0, 0.0, 0.0); "infinite width")]
    fn invalid(s: LayoutSettings) {
        assert!(s.validate().is_err());
    }
}
