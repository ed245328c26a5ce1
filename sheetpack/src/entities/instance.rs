use crate::entities::{DesignItem, LayoutSettings};
use crate::error::LayoutError;

/// A validated layout request: the designs to place and the sheet to place them on.
/// Can only be constructed through [`SheetInstance::new`], so every instance satisfies
/// the structural invariants checked there.
#[derive(Debug, Clone)]
pub struct SheetInstance {
    items: Vec<DesignItem>,
    settings: LayoutSettings,
}

impl SheetInstance {
    pub fn new(items: Vec<DesignItem>, settings: LayoutSettings) -> Result<Self, LayoutError> {
        settings.validate()?;
        for item in &items {
            item.validate()?;
        }
        Ok(Self { items, settings })
    }

    pub fn items(&self) -> &[DesignItem] {
        &self.items
    }

    pub fn item(&self, idx: usize) -> &DesignItem {
        &self.items[idx]
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn total_item_area(&self) -> f64 {
        self.items.iter().map(|i| i.area()).sum()
    }

    /// Whether rotating the item at `idx` is permitted by both the settings and the item itself.
    pub fn rotation_allowed(&self, idx: usize) -> bool {
        self.settings.allow_rotation && self.items[idx].can_rotate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_invalid_item_is_reported() {
        let items = vec![
            DesignItem::new("ok", "ok", 10.0, 10.0, true),
            DesignItem::new("bad", "bad", 10.0, 0.0, true),
        ];
        let err = SheetInstance::new(items, LayoutSettings::default()).unwrap_err();
        assert!(matches!(err, LayoutError::NonPositiveItemDimension { ref id, .. } if id == "bad"));
    }

    #[test]
    fn empty_request_is_valid() {
        let instance = SheetInstance::new(vec![], LayoutSettings::default()).unwrap();
        assert_eq!(instance.n_items(), 0);
        assert_eq!(instance.total_item_area(), 0.0);
    }
}
