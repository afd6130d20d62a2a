//! Terminal-agnostic keyboard input and key bindings.

/// Keyboard input abstraction.
///
/// Decouples viewer logic from terminal and browser key representations,
/// enabling deterministic testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character (space included).
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
}

/// Navigation command derived from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    /// Advance one slide.
    Next,
    /// Go back one slide.
    Previous,
    /// Show the slide at this zero-based index.
    JumpTo(usize),
    /// Close the viewer.
    Close,
}

/// A key resolved to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// Command to run.
    pub command: ViewerCommand,
    /// Whether the host's default handling of the key must be suppressed.
    pub suppress_default: bool,
}

impl KeyBinding {
    /// Resolve a key to its binding. Unbound keys return `None`.
    ///
    /// Right arrow and Space advance, Left arrow goes back, Escape closes.
    pub fn resolve(key: KeyInput) -> Option<Self> {
        match key {
            KeyInput::Right | KeyInput::Char(' ') => {
                Some(Self { command: ViewerCommand::Next, suppress_default: true })
            },
            KeyInput::Left => {
                Some(Self { command: ViewerCommand::Previous, suppress_default: true })
            },
            KeyInput::Esc => Some(Self { command: ViewerCommand::Close, suppress_default: false }),
            KeyInput::Char(_) | KeyInput::Enter | KeyInput::Up | KeyInput::Down => None,
        }
    }
}
