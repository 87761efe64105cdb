use egui::{Color32, Pos2};

/// One painted dot: a filled circle at a canvas-local position.
///
/// Points are immutable once created. The color and diameter are captured
/// from the brush at creation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    position: Pos2,
    color: Color32,
    diameter: f32,
}

impl Point {
    pub fn new(position: Pos2, color: Color32, diameter: f32) -> Self {
        Self {
            position,
            color,
            diameter,
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }
}
