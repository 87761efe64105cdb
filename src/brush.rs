use egui::{Color32, Pos2};

use crate::point::Point;

pub const MIN_DIAMETER: f32 = 1.0;
pub const MAX_DIAMETER: f32 = 20.0;
pub const DEFAULT_DIAMETER: f32 = 5.0;
pub const DEFAULT_COLOR: Color32 = Color32::from_rgb(0x24, 0x24, 0x24);

/// Current brush color and diameter.
///
/// Read once per point. Changing the brush never alters points that were
/// already painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushSettings {
    color: Color32,
    diameter: f32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            diameter: DEFAULT_DIAMETER,
        }
    }
}

impl BrushSettings {
    pub fn new(color: Color32, diameter: f32) -> Self {
        let mut brush = Self {
            color,
            diameter: DEFAULT_DIAMETER,
        };
        brush.set_diameter(diameter);
        brush
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    /// Sets the diameter, clamped to `MIN_DIAMETER..=MAX_DIAMETER`.
    /// Non-finite values leave the diameter unchanged.
    pub fn set_diameter(&mut self, diameter: f32) {
        if !diameter.is_finite() {
            log::warn!("Ignoring non-finite brush diameter {}", diameter);
            return;
        }
        self.diameter = diameter.clamp(MIN_DIAMETER, MAX_DIAMETER);
    }

    /// Create a point at `position` using the current brush
    pub fn point_at(&self, position: Pos2) -> Point {
        Point::new(position, self.color, self.diameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_brush() {
        let brush = BrushSettings::default();
        assert_eq!(brush.color(), Color32::from_rgb(0x24, 0x24, 0x24));
        assert_eq!(brush.diameter(), 5.0);
    }

    #[test]
    fn test_diameter_is_clamped() {
        let mut brush = BrushSettings::default();
        brush.set_diameter(50.0);
        assert_eq!(brush.diameter(), MAX_DIAMETER);
        brush.set_diameter(0.0);
        assert_eq!(brush.diameter(), MIN_DIAMETER);
        brush.set_diameter(12.0);
        assert_eq!(brush.diameter(), 12.0);
    }

    #[test]
    fn test_nan_diameter_is_ignored() {
        let mut brush = BrushSettings::new(Color32::RED, 7.0);
        brush.set_diameter(f32::NAN);
        assert_eq!(brush.diameter(), 7.0);
    }

    #[test]
    fn test_point_captures_current_brush() {
        let mut brush = BrushSettings::new(Color32::RED, 5.0);
        let point = brush.point_at(Pos2::new(3.0, 4.0));
        brush.set_color(Color32::BLUE);
        brush.set_diameter(10.0);

        assert_eq!(point.color(), Color32::RED);
        assert_eq!(point.diameter(), 5.0);
        assert_eq!(point.position(), Pos2::new(3.0, 4.0));
    }
}
