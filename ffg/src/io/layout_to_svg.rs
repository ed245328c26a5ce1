use sheetpack::entities::{ArrangementResult, SheetInstance};
use sheetpack::geometry::Rect;
use svg::Document;
use svg::node::element::{Group, Rectangle, Title};

use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;

/// Renders the sheet and every placed design of `result` as an SVG document, in mm.
pub fn layout_to_svg(
    result: &ArrangementResult,
    instance: &SheetInstance,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let settings = instance.settings();
    let sheet = settings.sheet_rect();
    let vbox = sheet.inflate(0.025 * f64::max(sheet.width(), sheet.height()));

    let theme = options.theme.get_theme();

    let stroke_width = f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    //draw sheet
    let sheet_group = {
        let title = Title::new(format!(
            "sheet, {} x {} mm, margin: {}, spacing: {}",
            settings.sheet_width, settings.sheet_height, settings.margin, settings.spacing
        ));
        let mut sheet_group = Group::new().set("id", "sheet").add(
            rectangle(
                &sheet,
                &[
                    ("fill", theme.sheet_fill),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            )
            .add(title),
        );
        if options.margins && settings.margin > 0.0 {
            let usable = settings.usable_rect();
            sheet_group = sheet_group.add(
                rectangle(
                    &usable,
                    &[
                        ("fill", "none"),
                        ("stroke", theme.margin_fill),
                        ("stroke-width", &*format!("{stroke_width}")),
                        ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                    ],
                )
                .add(Title::new(format!(
                    "usable area, {:.1} x {:.1} mm",
                    usable.width(),
                    usable.height()
                ))),
            );
        }
        sheet_group
    };

    //draw the spacing-expanded regions
    let spacing_group = match options.spacing && settings.spacing > 0.0 {
        false => None,
        true => {
            let stroke_color = svg_util::change_brightness(theme.item_fill, 0.5);
            let group = result.placements.iter().fold(
                Group::new().set("id", "spacing"),
                |group, pi| {
                    group.add(rectangle(
                        &pi.occupied_area(settings.spacing),
                        &[
                            ("fill", "none"),
                            ("stroke", &*stroke_color),
                            ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                            ("stroke-opacity", &*format!("{}", theme.spacing_stroke_opac)),
                            ("stroke-dasharray", &*format!("{}", 2.0 * stroke_width)),
                        ],
                    ))
                },
            );
            Some(group)
        }
    };

    //draw items
    let items_group = result
        .placements
        .iter()
        .fold(Group::new().set("id", "items"), |group, pi| {
            let item = instance.item(pi.item_idx);
            let fill = match pi.rotation.is_rotated() {
                true => theme.rotated_item_fill,
                false => theme.item_fill,
            };
            let title = Title::new(format!(
                "{}, id: {}, [x: {:.2}, y: {:.2}, w: {:.2}, h: {:.2}], rotation: {}",
                item.name, item.id, pi.x, pi.y, pi.width, pi.height, pi.rotation
            ));
            group.add(
                rectangle(
                    &pi.footprint(),
                    &[
                        ("fill", fill),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{stroke_width}")),
                        ("opacity", "0.9"),
                    ],
                )
                .add(title),
            )
        });

    let vbox_svg = (vbox.x_min, vbox.y_min, vbox.width(), vbox.height());

    let document = Document::new()
        .set("viewBox", vbox_svg)
        .add(Title::new(title.to_string()))
        .add(sheet_group)
        .add(items_group);

    match spacing_group {
        Some(group) => document.add(group),
        None => document,
    }
}

fn rectangle(rect: &Rect, params: &[(&str, &str)]) -> Rectangle {
    let rectangle = Rectangle::new()
        .set("x", rect.x_min)
        .set("y", rect.y_min)
        .set("width", rect.width())
        .set("height", rect.height());
    params
        .iter()
        .fold(rectangle, |r, (key, value)| r.set(*key, *value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FFGConfig;
    use crate::opt::budget::Budget;
    use crate::opt::packer::FFGPacker;
    use sheetpack::entities::{DesignItem, LayoutSettings};

    #[test]
    fn every_placement_is_drawn() {
        let items = vec![
            DesignItem::new("a", "Logo", 50.0, 30.0, true),
            DesignItem::new("b", "Label", 20.0, 80.0, true),
        ];
        let instance = SheetInstance::new(items, LayoutSettings::default()).unwrap();
        let budget = Budget::unlimited();
        let result = FFGPacker::new(&instance, &FFGConfig::default(), &budget).pack();

        let options = SvgDrawOptions {
            margins: true,
            spacing: true,
            ..SvgDrawOptions::default()
        };
        let svg = layout_to_svg(&result, &instance, options, "test").to_string();
        assert!(svg.contains("Logo, id: a"));
        assert!(svg.contains("Label, id: b"));
        assert!(svg.contains("usable area"));
        assert!(svg.contains("id=\"spacing\""));
    }
}
