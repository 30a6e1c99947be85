//! Input events delivered by the host to the dropdown.

/// Events the dropdown can respond to.
///
/// Positions are absolute screen coordinates, matching [`crate::Bounds`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Pointer pressed over the dropdown (anchor or its overlay).
    MousePress {
        button: MouseButton,
        position: (f32, f32),
    },
    /// Pointer pressed anywhere in the window. Broadcast to every widget
    /// with an open overlay so it can close on outside clicks.
    GlobalMousePress {
        button: MouseButton,
        position: (f32, f32),
    },
    /// Pointer moved.
    MouseMove { position: (f32, f32) },
    /// Wheel scrolled. Positive `delta` scrolls down.
    MouseScroll { delta: f32, position: (f32, f32) },
    /// Key pressed while the dropdown holds focus.
    KeyPress {
        key: KeyCode,
        modifiers: KeyModifiers,
    },
    /// The anchor gained keyboard focus.
    FocusGained,
    /// The anchor lost keyboard focus.
    FocusLost,
}

impl Event {
    /// Shorthand for a key press without modifiers.
    pub fn key(key: KeyCode) -> Self {
        Event::KeyPress {
            key,
            modifiers: KeyModifiers::default(),
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keys the dropdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Space,
    Escape,
    Tab,
    Up,
    Down,
    Home,
    End,
}

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}
