use bezier_beauty::palette::{self, Rgb};
use egui::Color32;

#[inline]
pub fn color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Colors and stroke sizes used to draw a frame, palette entries converted to egui colors.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Canvas fill behind everything else
    pub background: Color32,
    /// Stroke width for handle circles
    pub handle_circle_stroke: f32,
    /// Radius of the circle drawn at every handle point
    pub handle_circle_radius: f32,
    /// Stroke width for handle segments and the trail
    pub line_stroke: f32,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: color32(palette::BACKGROUND),
            handle_circle_stroke: 0.3,
            handle_circle_radius: 5.0,
            line_stroke: 1.0,
        }
    }
}

impl ThemeColors {
    pub fn level_color(&self, level_index: usize) -> Color32 {
        color32(palette::level_color(level_index))
    }

    pub fn trail_color(&self, sides: usize) -> Color32 {
        color32(palette::trail_color(sides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converted_palette() {
        let colors = ThemeColors::default();
        assert_eq!(colors.background, Color32::from_rgb(20, 20, 20));
        assert_eq!(colors.level_color(0), Color32::from_rgb(204, 0, 0));
        assert_eq!(colors.level_color(20), Color32::from_rgb(255, 80, 80));
        assert_eq!(colors.trail_color(9), Color32::from_rgb(214, 0, 147));
    }
}
