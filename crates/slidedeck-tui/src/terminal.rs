//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard and mouse events and ratatui for rendering. Clicks are resolved
//! against the [`HitMap`] of the most recent render.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use slidedeck_app::{Driver, KeyInput, Viewer, ViewerEvent};
use thiserror::Error;

use crate::{HitMap, ui};

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The terminal event stream ended.
    #[error("terminal input closed")]
    InputClosed,
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Owns the terminal for its lifetime: raw mode, the alternate screen and
/// mouse capture are enabled on creation and restored on [`Driver::stop`] or
/// drop.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    tick: Duration,
    hits: HitMap,
    active: bool,
}

impl TerminalDriver {
    /// Take over the terminal. `tick` bounds how long a poll waits for input.
    pub fn new(tick: Duration) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?.execute(EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, tick, hits: HitMap::default(), active: true })
    }

    /// Convert a crossterm key press to `KeyInput`.
    ///
    /// Ctrl+C maps to Esc since raw mode swallows the interrupt.
    fn convert_key(key: KeyEvent) -> Option<KeyInput> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(KeyInput::Esc);
        }

        match key.code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            _ => None,
        }
    }

    /// Resolve a left click against the last rendered controls.
    fn convert_mouse(&self, mouse: MouseEvent) -> Option<ViewerEvent> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.hits.target_at(mouse.column, mouse.row).map(ViewerEvent::Click)
            },
            _ => None,
        }
    }

    fn convert_event(&self, event: Event) -> Option<ViewerEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Self::convert_key(key).map(ViewerEvent::Key)
            },
            Event::Mouse(mouse) => self.convert_mouse(mouse),
            Event::Resize(cols, rows) => Some(ViewerEvent::Resize(cols, rows)),
            _ => None,
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<ViewerEvent>, Self::Error> {
        let maybe_event = tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => maybe_event,

            // Tick timeout
            () = tokio::time::sleep(self.tick) => return Ok(Some(ViewerEvent::Tick)),
        };

        match maybe_event {
            Some(Ok(event)) => Ok(self.convert_event(event)),
            Some(Err(e)) => Err(TerminalError::Io(e)),
            None => Err(TerminalError::InputClosed),
        }
    }

    fn render(&mut self, viewer: &Viewer) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| {
            self.hits = ui::render(frame, viewer);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        let _ = disable_raw_mode();
        let mut out = stdout();
        let _ = out.execute(DisableMouseCapture);
        let _ = out.execute(LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
