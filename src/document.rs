use crate::point::Point;

/// The stroke sequence: every visible point in paint order.
///
/// Later points are drawn on top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Document {
    points: Vec<Point>,
}

impl Document {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn remove_last_point(&mut self) -> Option<Point> {
        self.points.pop()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
