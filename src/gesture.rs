use crate::command::Command;
use crate::input::InputEvent;
use crate::state::BoardState;

/// Whether a paint gesture is in progress
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    /// Between a press on the canvas and the matching release
    Painting,
}

/// Turns pointer events into point commands.
///
/// A press on the canvas starts painting and places the first dot. Every
/// move on the canvas while painting places another. Moves while idle are
/// ignored.
#[derive(Debug, Default)]
pub struct GestureController {
    state: GestureState,
}

impl GestureController {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_painting(&self) -> bool {
        self.state == GestureState::Painting
    }

    /// Advance the state machine. Returns the command to dispatch, if any.
    /// Points are built from the brush in `board` at the time of the event.
    pub fn handle_event(&mut self, event: &InputEvent, board: &BoardState) -> Option<Command> {
        match (self.state, event) {
            (GestureState::Idle, InputEvent::PointerDown { location }) => {
                let pos = location.canvas_pos()?;
                log::debug!("Gesture started at {:?}", pos);
                self.state = GestureState::Painting;
                Some(Command::AppendPoint(board.point_at(pos)))
            }
            (GestureState::Painting, InputEvent::PointerMove { location }) => {
                let pos = location.canvas_pos()?;
                Some(Command::AppendPoint(board.point_at(pos)))
            }
            (GestureState::Painting, InputEvent::PointerUp { .. }) => {
                log::debug!("Gesture finished");
                self.state = GestureState::Idle;
                None
            }
            (GestureState::Painting, InputEvent::PointerLeave { .. }) => {
                self.cancel();
                None
            }
            _ => None,
        }
    }

    /// Abandon the current gesture without placing a point
    pub fn cancel(&mut self) {
        if self.state == GestureState::Painting {
            log::debug!("Gesture cancelled");
        }
        self.state = GestureState::Idle;
    }
}
