mod history;

use egui::Color32;

use crate::point::Point;

pub use history::CommandHistory;

/// Every change a user can make to the board.
///
/// All state transitions go through `BoardState::dispatch` with one of these,
/// which keeps the mutations in a single auditable place.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Paint one more dot on top of the drawing
    AppendPoint(Point),
    /// Move the last dot onto the redo buffer
    Undo,
    /// Move the most recently undone dot back onto the drawing
    Redo,
    /// Remove every dot and forget the redo buffer
    Clear,
    SetColor(Color32),
    SetBrushDiameter(f32),
    CycleBackground,
}

impl Command {
    /// Short human readable name, used for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::AppendPoint(_) => "AppendPoint",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Clear => "Clear",
            Command::SetColor(_) => "SetColor",
            Command::SetBrushDiameter(_) => "SetBrushDiameter",
            Command::CycleBackground => "CycleBackground",
        }
    }
}
