use super::*;

/// Keys the widgets care about. Anything the host cannot map goes to
/// `Key::Other` and is treated as a possible character key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
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
    Insert,
    Enter,
    KeypadEnter,
    Tab,
    Escape,
    LeftShift,
    RightShift,
    LeftCtrl,
    RightCtrl,
    LeftAlt,
    RightAlt,
    LeftSuper,
    RightSuper,
    LeftMeta,
    RightMeta,
    CapsLock,
    NumLock,
    ScrollLock,
    Print,
    SysReq,
    Break,
    Menu,
    Power,
    Help,
    Mode,
    Euro,
    /// F1 through F15.
    Function(u8),
    Other,
}

impl Key {
    /// Keys that never edit text and never end a batch.
    pub fn is_ignorable(self) -> bool {
        matches!(
            self,
            Key::Up
                | Key::Down
                | Key::PageUp
                | Key::PageDown
                | Key::Insert
                | Key::Escape
                | Key::LeftShift
                | Key::RightShift
                | Key::LeftCtrl
                | Key::RightCtrl
                | Key::LeftAlt
                | Key::RightAlt
                | Key::LeftSuper
                | Key::RightSuper
                | Key::LeftMeta
                | Key::RightMeta
                | Key::CapsLock
                | Key::NumLock
                | Key::ScrollLock
                | Key::Print
                | Key::SysReq
                | Key::Break
                | Key::Menu
                | Key::Power
                | Key::Help
                | Key::Mode
                | Key::Euro
                | Key::Function(_)
        )
    }
}

/// A key press together with the character it produced, if any.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub text: Option<char>,
}

impl KeyEvent {
    pub const fn key(key: Key) -> Self {
        Self { key, text: None }
    }

    pub const fn char(ch: char) -> Self {
        Self {
            key: Key::Other,
            text: Some(ch),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    KeyDown(KeyEvent),
    /// Primary pointer button released at a position.
    PointerUp(Point),
}

impl Event {
    pub const fn key(key: Key) -> Self {
        Self::KeyDown(KeyEvent::key(key))
    }

    pub const fn char(ch: char) -> Self {
        Self::KeyDown(KeyEvent::char(ch))
    }

    pub const fn click(x: i32, y: i32) -> Self {
        Self::PointerUp(Point::new(x, y))
    }

    /// One `char` event per character of `s`.
    pub fn typed(s: &str) -> Vec<Event> {
        s.chars().map(Event::char).collect()
    }
}

/// Frame timing for one update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameClock {
    pub frames_elapsed: u32,
    pub fps: u32,
}

impl FrameClock {
    /// Like [`FrameClock::new`], but refuses a zero frame rate.
    pub fn try_new(fps: u32) -> Result<Self> {
        if fps == 0 {
            return Err(Error::InvalidOptions("fps must be positive"));
        }
        Ok(Self::new(fps))
    }

    /// A zero `fps` is accepted here; the caret then never blinks.
    pub const fn new(fps: u32) -> Self {
        Self {
            frames_elapsed: 1,
            fps,
        }
    }

    pub const fn with_frames(self, frames_elapsed: u32) -> Self {
        Self {
            frames_elapsed,
            ..self
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60)
    }
}
