use crate::entities::DesignItem;

/// Slack on top of the total design area, leaving room for spacing and imperfect packing.
const AREA_SLACK: f64 = 1.3;

/// A commonly stocked print sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StandardSheet {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
}

impl StandardSheet {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Standard sheets, from small to large.
pub const STANDARD_SHEETS: [StandardSheet; 3] = [
    StandardSheet {
        name: "A4",
        width: 210.0,
        height: 297.0,
    },
    StandardSheet {
        name: "A3+",
        width: 330.0,
        height: 480.0,
    },
    StandardSheet {
        name: "A2",
        width: 480.0,
        height: 640.0,
    },
];

/// Smallest standard sheet with enough area for `items`, or the largest one if none is.
/// Only the total area is considered, so the suggested sheet is not guaranteed to fit every design.
pub fn suggest_sheet(items: &[DesignItem]) -> StandardSheet {
    let required_area = items.iter().map(|i| i.area()).sum::<f64>() * AREA_SLACK;

    STANDARD_SHEETS
        .iter()
        .find(|s| s.area() >= required_area)
        .copied()
        .unwrap_or(STANDARD_SHEETS[STANDARD_SHEETS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smallest_sufficient_sheet() {
        let few = vec![DesignItem::new("a", "a", 50.0, 30.0, true)];
        assert_eq!(suggest_sheet(&few).name, "A4");

        let many = (0..40)
            .map(|i| DesignItem::new(i.to_string(), "tile", 50.0, 50.0, true))
            .collect::<Vec<_>>();
        assert_eq!(suggest_sheet(&many).name, "A3+");

        let huge = vec![DesignItem::new("h", "poster", 1000.0, 1000.0, true)];
        assert_eq!(suggest_sheet(&huge).name, "A2");
    }
}
