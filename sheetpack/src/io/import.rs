use log::info;

use crate::entities::{DesignItem, LayoutSettings, SheetInstance};
use crate::error::LayoutError;
use crate::io::ext_repr::{ExtDesignItem, ExtLayoutRequest, ExtLayoutSettings};

/// Imports a request into the library, validating it in the process.
pub fn import(ext_request: &ExtLayoutRequest) -> Result<SheetInstance, LayoutError> {
    let settings = import_settings(&ext_request.settings);
    let items = ext_request.items.iter().map(import_item).collect();

    let instance = SheetInstance::new(items, settings)?;

    info!(
        "[IMPORT] {} designs ({:.0} mm²) on a {} x {} mm sheet (usable area: {} x {} mm)",
        instance.n_items(),
        instance.total_item_area(),
        settings.sheet_width,
        settings.sheet_height,
        settings.usable_width(),
        settings.usable_height()
    );

    Ok(instance)
}

fn import_settings(ext_settings: &ExtLayoutSettings) -> LayoutSettings {
    LayoutSettings {
        sheet_width: ext_settings.sheet_width,
        sheet_height: ext_settings.sheet_height,
        margin: ext_settings.margin,
        spacing: ext_settings.spacing,
        allow_rotation: ext_settings.allow_rotation,
        optimize_for_waste: ext_settings.optimize_for_waste,
    }
}

fn import_item(ext_item: &ExtDesignItem) -> DesignItem {
    DesignItem {
        id: ext_item.id.clone(),
        name: ext_item.name.clone(),
        width: ext_item.width,
        height: ext_item.height,
        can_rotate: ext_item.can_rotate,
        priority: ext_item.priority,
        group: ext_item.group.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Priority;

    const REQUEST: &str = r#"{
        "name": "stickers",
        "items": [
            { "id": "a", "name": "Logo", "width": 50, "height": 30 },
            { "id": "b", "name": "Label", "width": 20, "height": 80, "canRotate": false, "priority": "high" }
        ],
        "settings": { "sheetWidth": 330, "sheetHeight": 480, "margin": 5, "spacing": 3 }
    }"#;

    #[test]
    fn defaults_are_filled_in() {
        let ext_request: ExtLayoutRequest = serde_json::from_str(REQUEST).unwrap();
        let instance = import(&ext_request).unwrap();

        assert_eq!(instance.n_items(), 2);
        assert!(instance.item(0).can_rotate);
        assert!(!instance.item(1).can_rotate);
        assert_eq!(instance.item(1).priority(), Priority::High);
        assert!(instance.settings().allow_rotation);
        assert!(instance.settings().optimize_for_waste);
        assert_eq!(instance.settings().margin, 5.0);
    }

    #[test]
    fn structural_errors_are_rejected() {
        let mut ext_request: ExtLayoutRequest = serde_json::from_str(REQUEST).unwrap();
        ext_request.settings.spacing = -1.0;
        assert_eq!(import(&ext_request).unwrap_err(), LayoutError::NegativeSpacing(-1.0));
    }
}
