use crate::document::Document;
use crate::point::Point;

/// Manages the redo buffer for point-level undo/redo.
///
/// The undo side of the history is the document itself: undoing pops the
/// last point of the stroke sequence. Only the undone points are kept here.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    /// Points removed by undo, most recently removed last
    redo_stack: Vec<Point>,
}

impl CommandHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self {
            redo_stack: Vec::new(),
        }
    }

    /// Undo the last painted point. Returns false if there was nothing to undo.
    pub fn undo(&mut self, document: &mut Document) -> bool {
        match document.remove_last_point() {
            Some(point) => {
                self.redo_stack.push(point);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone point. Returns false if the redo buffer is empty.
    pub fn redo(&mut self, document: &mut Document) -> bool {
        match self.redo_stack.pop() {
            Some(point) => {
                document.add_point(point);
                true
            }
            None => false,
        }
    }

    /// Drop every undone point. Called whenever the drawing changes by any
    /// means other than undo/redo.
    pub fn invalidate(&mut self) {
        if !self.redo_stack.is_empty() {
            log::debug!("Discarding {} undone points", self.redo_stack.len());
        }
        self.redo_stack.clear();
    }

    /// Returns true if there are points that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn redo_stack(&self) -> &[Point] {
        &self.redo_stack
    }
}
