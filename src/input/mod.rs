use egui::{Context, Event, PointerButton, Pos2, Rect};

mod dispatcher;
mod view;

pub use dispatcher::InputDispatcher;
pub use view::CanvasView;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// Whether the position lies on the drawing canvas
    pub in_canvas: bool,
}

/// Represents different types of input events that can occur on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        location: InputLocation,
        /// Buttons that are currently held down
        held_buttons: Vec<PointerButton>,
    },
    /// Wheel scrolled; positive `delta` zooms in
    Scroll { location: InputLocation, delta: f32 },
    /// The orthogonal constraint modifier changed
    ModifiersChanged { shift: bool },
}

const BUTTONS: [PointerButton; 3] = [PointerButton::Primary, PointerButton::Secondary, PointerButton::Middle];

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    shift_held: bool,
    canvas_rect: Option<Rect>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the canvas rectangle, in screen coordinates
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            in_canvas: self.canvas_rect.is_some_and(|rect| rect.contains(pos)),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            if input.modifiers.shift != self.shift_held {
                self.shift_held = input.modifiers.shift;
                events.push(InputEvent::ModifiersChanged {
                    shift: self.shift_held,
                });
            }

            let Some(pos) = input.pointer.hover_pos() else {
                // The pointer left the window; a release still ends the gesture
                if let Some(last) = self.last_pointer_pos {
                    let location = self.make_location(last);
                    for button in BUTTONS {
                        if input.pointer.button_released(button) {
                            events.push(InputEvent::PointerUp { location, button });
                        }
                    }
                }
                return;
            };
            let location = self.make_location(pos);

            if Some(pos) != self.last_pointer_pos {
                let held_buttons = BUTTONS
                    .into_iter()
                    .filter(|button| input.pointer.button_down(*button))
                    .collect();
                events.push(InputEvent::PointerMove { location, held_buttons });
                self.last_pointer_pos = Some(pos);
            }

            for button in BUTTONS {
                if input.pointer.button_pressed(button) {
                    events.push(InputEvent::PointerDown { location, button });
                }
                if input.pointer.button_released(button) {
                    events.push(InputEvent::PointerUp { location, button });
                }
            }

            // One event per wheel notch; the smoothed delta spreads a notch over many frames
            for event in &input.events {
                if let Event::MouseWheel { delta, .. } = event {
                    if delta.y != 0.0 {
                        events.push(InputEvent::Scroll { location, delta: delta.y });
                    }
                }
            }
        });

        events
    }
}
