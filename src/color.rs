use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Property type → Color32
// ---------------------------------------------------------------------------

/// Stable colour per property type, so a type keeps its colour across
/// boroughs.
#[derive(Debug, Clone)]
pub struct TypeColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl TypeColors {
    /// Assign colours to every type in `types`, alphabetically.
    pub fn new<'a>(types: impl IntoIterator<Item = &'a str>) -> Self {
        let names: Vec<&str> = {
            let mut v: Vec<&str> = types.into_iter().collect();
            v.sort_unstable();
            v.dedup();
            v
        };
        let palette = generate_palette(names.len());
        let mapping = names
            .into_iter()
            .zip(palette)
            .map(|(name, c)| (name.to_string(), c))
            .collect();

        TypeColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a property type. Unknown or missing types are grey.
    pub fn color_for(&self, property_type: Option<&str>) -> Color32 {
        property_type
            .and_then(|t| self.mapping.get(t))
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
        let p = generate_palette(5);
        assert_eq!(p.len(), 5);
        for i in 0..p.len() {
            for j in (i + 1)..p.len() {
                assert_ne!(p[i], p[j]);
            }
        }
    }

    #[test]
    fn same_type_gets_same_colour_regardless_of_order() {
        let a = TypeColors::new(["Condo", "Apartment", "Condo"]);
        let b = TypeColors::new(["Apartment", "Condo"]);
        assert_eq!(a.color_for(Some("Condo")), b.color_for(Some("Condo")));
        assert_ne!(a.color_for(Some("Condo")), a.color_for(Some("Apartment")));
        assert_eq!(a.color_for(None), Color32::GRAY);
    }
}
