use egui::{Color32, Pos2};

use crate::background::BackgroundSelector;
use crate::brush::BrushSettings;
use crate::command::{Command, CommandHistory};
use crate::config::BoardConfig;
use crate::document::Document;
use crate::error::BoardResult;
use crate::point::Point;

/// All mutable state of the board, owned by the app.
///
/// State only changes through [`BoardState::dispatch`]. The convenience
/// methods below each build a [`Command`] and dispatch it.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    document: Document,
    history: CommandHistory,
    brush: BrushSettings,
    background: BackgroundSelector,
    /// Bumped on every change to the stroke sequence
    version: u64,
}

impl BoardState {
    pub fn new(config: &BoardConfig) -> BoardResult<Self> {
        config.validate()?;
        Ok(Self {
            document: Document::new(),
            history: CommandHistory::new(),
            brush: BrushSettings::new(config.brush_color()?, config.brush_diameter),
            background: BackgroundSelector::new(config.backgrounds.clone(), &config.initial_background)?,
            version: 0,
        })
    }

    /// Apply a command. Returns true if the visible drawing changed.
    pub fn dispatch(&mut self, command: Command) -> bool {
        if matches!(command, Command::AppendPoint(_)) {
            log::trace!("Dispatching {:?}", command);
        } else {
            log::debug!("Dispatching {:?}", command);
        }

        let changed = match command {
            Command::AppendPoint(point) => {
                self.document.add_point(point);
                self.history.invalidate();
                true
            }
            Command::Undo => self.history.undo(&mut self.document),
            Command::Redo => self.history.redo(&mut self.document),
            Command::Clear => {
                let had_points = !self.document.is_empty();
                self.document.clear();
                self.history.invalidate();
                had_points
            }
            Command::SetColor(color) => {
                self.brush.set_color(color);
                false
            }
            Command::SetBrushDiameter(diameter) => {
                self.brush.set_diameter(diameter);
                false
            }
            Command::CycleBackground => {
                let name = self.background.cycle();
                log::info!("Background changed to {:?}", name);
                false
            }
        };

        if changed {
            self.version += 1;
        }
        changed
    }

    pub fn append_point(&mut self, point: Point) -> bool {
        self.dispatch(Command::AppendPoint(point))
    }

    pub fn undo(&mut self) -> bool {
        self.dispatch(Command::Undo)
    }

    pub fn redo(&mut self) -> bool {
        self.dispatch(Command::Redo)
    }

    pub fn clear(&mut self) -> bool {
        self.dispatch(Command::Clear)
    }

    pub fn set_color(&mut self, color: Color32) {
        self.dispatch(Command::SetColor(color));
    }

    pub fn set_brush_diameter(&mut self, diameter: f32) {
        self.dispatch(Command::SetBrushDiameter(diameter));
    }

    pub fn cycle_background(&mut self) -> &str {
        self.dispatch(Command::CycleBackground);
        self.background.current()
    }

    /// A new point at `position` using the current brush
    pub fn point_at(&self, position: Pos2) -> Point {
        self.brush.point_at(position)
    }

    pub fn points(&self) -> &[Point] {
        self.document.points()
    }

    pub fn redo_points(&self) -> &[Point] {
        self.history.redo_stack()
    }

    pub fn can_undo(&self) -> bool {
        !self.document.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    pub fn background(&self) -> &BackgroundSelector {
        &self.background
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}
