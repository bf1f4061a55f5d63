//! Input event types decoupled from the platform layer.
//!
//! Defines [`TouchEvent`], [`KeyEvent`], [`InputEvent`] and supporting types.
//! Platform events from crossterm are converted here so the rest of the crate
//! never depends on crossterm directly. The left mouse button acts as touch
//! contact `0`.

use bitflags::bitflags;

use crate::geometry::Size;

// ---------------------------------------------------------------------------
// TouchEvent
// ---------------------------------------------------------------------------

/// Phase of a touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchEvent {
    Press,
    Move,
    Release,
}

/// A positioned touch sample, in parent-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchInput {
    pub event: TouchEvent,
    pub x: f32,
    pub y: f32,
    /// Order of occurrence among simultaneous contacts, starting at zero.
    pub contact: u32,
}

impl TouchInput {
    /// Create a sample for contact `0`.
    pub fn primary(event: TouchEvent, x: f32, y: f32) -> Self {
        Self { event, x, y, contact: 0 }
    }
}

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
    }
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Modifiers = Modifiers::empty();
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// What happened to the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Press,
    Release,
    /// A character was produced (text input), independent of press/release.
    Char,
}

/// A keyboard event with action, key, and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub action: KeyAction,
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(action: KeyAction, code: Key, modifiers: Modifiers) -> Self {
        Self { action, code, modifiers }
    }

    /// Shorthand for an unmodified key press.
    pub fn press(code: Key) -> Self {
        Self::new(KeyAction::Press, code, Modifiers::NONE)
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level input event delivered to a root container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Touch(TouchInput),
    Key(KeyEvent),
    Resize { width: f32, height: f32 },
}

// ---------------------------------------------------------------------------
// crossterm conversions
// ---------------------------------------------------------------------------

/// Convert crossterm key modifiers to our `Modifiers`.
fn convert_modifiers(m: crossterm::event::KeyModifiers) -> Modifiers {
    use crossterm::event::KeyModifiers;

    let mut out = Modifiers::NONE;
    out.set(Modifiers::SHIFT, m.contains(KeyModifiers::SHIFT));
    out.set(Modifiers::CTRL, m.contains(KeyModifiers::CONTROL));
    out.set(Modifiers::ALT, m.contains(KeyModifiers::ALT));
    out
}

impl KeyEvent {
    /// Convert a crossterm key event. Returns `None` for key codes with no
    /// [`Key`] counterpart (Insert, media keys, bare modifiers and so on).
    pub fn from_crossterm(ct: crossterm::event::KeyEvent) -> Option<KeyEvent> {
        let code = match ct.code {
            crossterm::event::KeyCode::Char(c) => Key::Char(c),
            crossterm::event::KeyCode::Enter => Key::Enter,
            crossterm::event::KeyCode::Esc => Key::Escape,
            crossterm::event::KeyCode::Tab => Key::Tab,
            crossterm::event::KeyCode::BackTab => Key::BackTab,
            crossterm::event::KeyCode::Backspace => Key::Backspace,
            crossterm::event::KeyCode::Delete => Key::Delete,
            crossterm::event::KeyCode::Left => Key::Left,
            crossterm::event::KeyCode::Right => Key::Right,
            crossterm::event::KeyCode::Up => Key::Up,
            crossterm::event::KeyCode::Down => Key::Down,
            crossterm::event::KeyCode::Home => Key::Home,
            crossterm::event::KeyCode::End => Key::End,
            crossterm::event::KeyCode::PageUp => Key::PageUp,
            crossterm::event::KeyCode::PageDown => Key::PageDown,
            crossterm::event::KeyCode::F(n) => Key::F(n),
            _ => return None,
        };
        let action = match ct.kind {
            crossterm::event::KeyEventKind::Release => KeyAction::Release,
            crossterm::event::KeyEventKind::Press | crossterm::event::KeyEventKind::Repeat => {
                KeyAction::Press
            }
        };
        Some(KeyEvent { action, code, modifiers: convert_modifiers(ct.modifiers) })
    }
}

impl InputEvent {
    /// Convert a crossterm event, scaling terminal cells to pixels by `cell`.
    ///
    /// Left-button down/drag/up become touch press/move/release on contact
    /// `0`. Returns `None` for events with no touch, key or resize meaning.
    pub fn from_crossterm(event: crossterm::event::Event, cell: Size) -> Option<InputEvent> {
        use crossterm::event::{Event, MouseButton, MouseEventKind};

        match event {
            Event::Key(ke) => KeyEvent::from_crossterm(ke).map(InputEvent::Key),
            Event::Mouse(me) => {
                let touch = match me.kind {
                    MouseEventKind::Down(MouseButton::Left) => TouchEvent::Press,
                    MouseEventKind::Drag(MouseButton::Left) => TouchEvent::Move,
                    MouseEventKind::Up(MouseButton::Left) => TouchEvent::Release,
                    _ => return None,
                };
                Some(InputEvent::Touch(TouchInput::primary(
                    touch,
                    me.column as f32 * cell.width,
                    me.row as f32 * cell.height,
                )))
            }
            Event::Resize(w, h) => Some(InputEvent::Resize {
                width: w as f32 * cell.width,
                height: h as f32 * cell.height,
            }),
            _ => None,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
