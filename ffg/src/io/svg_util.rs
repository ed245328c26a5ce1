use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgLayoutThemes,
    /// Draws the border of the sheet where nothing can be placed
    #[serde(default)]
    pub margins: bool,
    /// Draws the spacing-expanded region around every placed design
    #[serde(default)]
    pub spacing: bool,
}

#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum SvgLayoutThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::EarthTones => EARTH_TONES_THEME,
            SvgLayoutThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub sheet_fill: &'static str,
    pub margin_fill: &'static str,
    pub item_fill: &'static str,
    pub rotated_item_fill: &'static str,
    pub spacing_stroke_opac: f64,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        EARTH_TONES_THEME
    }
}

pub static EARTH_TONES_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.0,
    sheet_fill: "#CC824A",
    margin_fill: "#8C5A33",
    item_fill: "#FFC879",
    rotated_item_fill: "#FFAD00",
    spacing_stroke_opac: 0.5,
};

pub static GRAY_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.5,
    sheet_fill: "#C3C3C3",
    margin_fill: "#636363",
    item_fill: "#8F8F8F",
    rotated_item_fill: "#7A7A7A",
    spacing_stroke_opac: 0.9,
};

/// Scales the brightness of a `#RRGGBB` color by `fraction`.
/// Returns the color unchanged if it is not in that format.
pub fn change_brightness(color: &str, fraction: f64) -> String {
    let hex = color.strip_prefix('#').unwrap_or(color);
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
    };
    match (hex.len(), channel(0), channel(2), channel(4)) {
        (6, Some(r), Some(g), Some(b)) => {
            let scale = |c: u8| (c as f64 * fraction).clamp(0.0, 255.0) as u8;
            format!("#{:02X}{:02X}{:02X}", scale(r), scale(g), scale(b))
        }
        _ => color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness() {
        assert_eq!(change_brightness("#FF8000", 0.5), "#7F4000");
        assert_eq!(change_brightness("808080", 2.0), "#FFFFFF");
        assert_eq!(change_brightness("black", 0.5), "black");
    }
}
