use egui::{PointerButton, Pos2, Rect};

/// Pointer events on the canvas, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed over the canvas
    PointerDown { pos: Pos2, button: PointerButton },
    /// Pointer moved over the canvas
    PointerMove { pos: Pos2, primary_held: bool },
    /// Mouse button was released
    PointerUp { pos: Pos2, button: PointerButton },
    /// Pointer left the canvas
    PointerLeave,
}

/// The pointer facts for one frame, in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    pub hover_pos: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_released: bool,
    pub primary_down: bool,
}

impl PointerSnapshot {
    /// Reads this frame's pointer state from egui
    pub fn capture(ctx: &egui::Context) -> Self {
        ctx.input(|input| Self {
            hover_pos: input.pointer.hover_pos(),
            primary_pressed: input.pointer.button_pressed(PointerButton::Primary),
            primary_released: input.pointer.button_released(PointerButton::Primary),
            primary_down: input.pointer.primary_down(),
        })
    }
}

/// Handles converting raw pointer state into canvas InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_local_pos: Option<Pos2>,
    inside: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce this frame's events, in down, move, up order
    pub fn process(&mut self, snapshot: PointerSnapshot, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let local = snapshot
            .hover_pos
            .filter(|pos| canvas_rect.contains(*pos))
            .map(|pos| pos - canvas_rect.min.to_vec2());

        let Some(pos) = local else {
            if self.inside {
                events.push(InputEvent::PointerLeave);
            }
            self.inside = false;
            self.last_local_pos = None;
            return events;
        };

        if snapshot.primary_pressed {
            events.push(InputEvent::PointerDown {
                pos,
                button: PointerButton::Primary,
            });
        }

        // A move arriving in the press frame only updates the hover position;
        // dragging it would give a plain click a second point.
        if Some(pos) != self.last_local_pos {
            events.push(InputEvent::PointerMove {
                pos,
                primary_held: snapshot.primary_down && !snapshot.primary_pressed,
            });
        }

        if snapshot.primary_released {
            events.push(InputEvent::PointerUp {
                pos,
                button: PointerButton::Primary,
            });
        }

        self.inside = true;
        self.last_local_pos = Some(pos);
        events
    }
}
