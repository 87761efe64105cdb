use egui::{Context, Event, PointerButton, Pos2, Rect};

/// Represents which part of the window an input event occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// The drawing canvas
    Canvas,
    /// Anywhere else: the controls panel, margins, outside the window
    Outside,
}

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// The panel in which the event occurred
    pub panel: PanelKind,
    /// Top-left corner of the canvas in screen coordinates
    canvas_origin: Pos2,
}

impl InputLocation {
    /// A location on a canvas whose origin is the screen origin
    pub fn on_canvas(local: Pos2) -> Self {
        Self {
            position: local,
            panel: PanelKind::Canvas,
            canvas_origin: Pos2::ZERO,
        }
    }

    pub fn outside(position: Pos2) -> Self {
        Self {
            position,
            panel: PanelKind::Outside,
            canvas_origin: Pos2::ZERO,
        }
    }

    /// Canvas-local position, or None if the event was not on the canvas
    pub fn canvas_pos(&self) -> Option<Pos2> {
        (self.panel == PanelKind::Canvas).then(|| (self.position - self.canvas_origin).to_pos2())
    }
}

/// Pointer events the board reacts to. Only the primary button paints.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { location: InputLocation },
    /// Pointer moved, with or without the button held
    PointerMove { location: InputLocation },
    /// Primary button was released
    PointerUp { location: InputLocation },
    /// Pointer left the application window
    PointerLeave { last_known_location: InputLocation },
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Option<Rect>,
    /// False while another layer (a popup, a window) covers the pointer
    canvas_owns_pointer: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect: None,
            canvas_owns_pointer: false,
        }
    }

    /// Update the canvas rectangle, in screen coordinates, and whether the
    /// canvas widget is the topmost thing under the pointer this frame
    pub fn set_canvas(&mut self, rect: Rect, owns_pointer: bool) {
        self.canvas_rect = Some(rect);
        self.canvas_owns_pointer = owns_pointer;
    }

    pub fn canvas_rect(&self) -> Option<Rect> {
        self.canvas_rect
    }

    /// Creates an InputLocation from a screen position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        match self.canvas_rect {
            Some(rect) if self.canvas_owns_pointer && rect.contains(pos) => InputLocation {
                position: pos,
                panel: PanelKind::Canvas,
                canvas_origin: rect.min,
            },
            _ => InputLocation::outside(pos),
        }
    }

    /// Process this frame's egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| self.collect_events(&input.events))
    }

    /// Walks the frame's pointer events in order, so every move reported
    /// by the backend becomes its own event.
    fn collect_events(&mut self, raw_events: &[Event]) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in raw_events {
            match event {
                Event::PointerMoved(pos) => {
                    if Some(*pos) != self.last_pointer_pos {
                        events.push(InputEvent::PointerMove {
                            location: self.make_location(*pos),
                        });
                        self.last_pointer_pos = Some(*pos);
                    }
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    let location = self.make_location(*pos);
                    self.last_pointer_pos = Some(*pos);
                    if *pressed {
                        events.push(InputEvent::PointerDown { location });
                    } else {
                        events.push(InputEvent::PointerUp { location });
                    }
                }
                Event::PointerGone => {
                    if let Some(last) = self.last_pointer_pos.take() {
                        events.push(InputEvent::PointerLeave {
                            last_known_location: self.make_location(last),
                        });
                    }
                }
                _ => {}
            }
        }

        events
    }
}
