//! Event system

/// All possible UI events
#[derive(Debug, Clone)]
pub enum Event {
    // Mouse events
    MouseDown { x: f32, y: f32, button: MouseButton },
    MouseUp { x: f32, y: f32, button: MouseButton },
    MouseMove { x: f32, y: f32 },

    // Window events
    Resize { width: f32, height: f32 },
    Close,
}

impl Event {
    /// Primary-button click, the one gesture the demo widgets react to
    pub fn click() -> Self {
        Event::MouseUp {
            x: 0.0,
            y: 0.0,
            button: MouseButton::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
