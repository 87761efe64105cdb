use egui::{Key, KeyboardShortcut, Modifiers};

use crate::command::Command;
use crate::config::BoardConfig;
use crate::error::BoardResult;
use crate::gesture::GestureController;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::state::BoardState;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUTS: [KeyboardShortcut; 2] = [
    KeyboardShortcut::new(Modifiers { shift: true, ..Modifiers::COMMAND }, Key::Z),
    KeyboardShortcut::new(Modifiers::COMMAND, Key::Y),
];

/// The drawing board: one canvas and its controls.
///
/// Nothing is saved on shutdown; the drawing lives only as long as the window.
pub struct DrawingBoardApp {
    config: BoardConfig,
    state: BoardState,
    renderer: Renderer,
    input: InputHandler,
    gesture: GestureController,
}

impl DrawingBoardApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: BoardConfig) -> BoardResult<Self> {
        let renderer = Renderer::new(cc, &config)?;
        Self::with_renderer(config, renderer)
    }

    pub fn with_renderer(config: BoardConfig, renderer: Renderer) -> BoardResult<Self> {
        let state = BoardState::new(&config)?;
        log::info!(
            "Drawing board ready: {}x{} canvas, background {:?}",
            config.canvas_width,
            config.canvas_height,
            state.background().current()
        );
        Ok(Self {
            config,
            state,
            renderer,
            input: InputHandler::new(),
            gesture: GestureController::new(),
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn gesture(&self) -> &GestureController {
        &self.gesture
    }

    pub fn input(&self) -> &InputHandler {
        &self.input
    }

    /// Run a command against the board. Returns true if the drawing changed.
    pub fn execute(&mut self, command: Command) -> bool {
        if !matches!(command, Command::AppendPoint(_) | Command::SetColor(_) | Command::SetBrushDiameter(_)) {
            log::info!("{} requested", command.name());
        }
        self.state.dispatch(command)
    }

    /// Feed this frame's pointer input through the gesture controller.
    /// `canvas` is the canvas widget's response; a canvas covered by a popup
    /// is not hovered and so receives no points.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas: &egui::Response) {
        self.input.set_canvas(canvas.rect, canvas.hovered());

        let mut changed = false;
        for event in self.input.process_input(ctx) {
            if let Some(command) = self.gesture.handle_event(&event, &self.state) {
                changed |= self.execute(command);
            }
        }
        if changed {
            ctx.request_repaint();
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Redo first: the undo shortcut also matches with shift held
        let redo = ctx.input_mut(|i| REDO_SHORTCUTS.iter().any(|shortcut| i.consume_shortcut(shortcut)));
        if redo {
            self.execute(Command::Redo);
        } else if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.execute(Command::Undo);
        }
    }

    /// Paint the whole canvas into `rect`
    pub fn paint_canvas(&mut self, painter: &egui::Painter, rect: egui::Rect) {
        self.renderer
            .paint_canvas(painter, rect, self.state.background().current(), self.state.points());
    }

    /// Lay out and run one frame of the board
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.handle_shortcuts(ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}

impl eframe::App for DrawingBoardApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
