//! Fuzz target for the Viewer state machine
//!
//! # Strategy
//!
//! - Arbitrary interleavings of opens, load completions (current, stale and
//!   future generations), keys, clicks, ticks and resizes
//!
//! # Invariants
//!
//! - Ready implies `current_index < slide_count` (or an empty deck at 0)
//! - The view only ever reflects the most recently opened source
//! - Navigation never moves outside Ready
//! - Error state always carries a non-empty message
//! - Reopening the shown source changes nothing
//! - NEVER panic

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slidedeck_app::{
    ClickTarget, KeyInput, PresentationResult, SlideRecord, ViewStatus, Viewer, ViewerEvent,
};

#[derive(Debug, Arbitrary)]
enum Op {
    Open(u8),
    Finish { generation_offset: i8, slides: u8, failure: Option<Failure> },
    Key(Key),
    Click(Click),
    Next,
    Previous,
    JumpTo(u16),
    Tick,
    Resize(u16, u16),
}

#[derive(Debug, Arbitrary)]
enum Failure {
    /// Through `PresentationResult::failed`.
    Checked(String),
    /// Built directly, message untouched.
    Raw(String),
}

#[derive(Debug, Arbitrary)]
enum Key {
    Left,
    Right,
    Space,
    Esc,
    Enter,
    Other(char),
}

#[derive(Debug, Arbitrary)]
enum Click {
    Previous,
    Next,
    Marker(u16),
    Close,
}

fn key(k: Key) -> KeyInput {
    match k {
        Key::Left => KeyInput::Left,
        Key::Right => KeyInput::Right,
        Key::Space => KeyInput::Char(' '),
        Key::Esc => KeyInput::Esc,
        Key::Enter => KeyInput::Enter,
        Key::Other(c) => KeyInput::Char(c),
    }
}

fn click(c: Click) -> ClickTarget {
    match c {
        Click::Previous => ClickTarget::Previous,
        Click::Next => ClickTarget::Next,
        Click::Marker(i) => ClickTarget::Marker(i as usize),
        Click::Close => ClickTarget::Close,
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut viewer = Viewer::default();
    let mut last_opened: Option<String> = None;

    for op in ops {
        let before = viewer.state().clone();

        let navigating = match op {
            Op::Open(n) => {
                let locator = format!("deck-{n}.pptx");
                let generation = viewer.generation();
                let actions = viewer.open(locator.clone().into());
                if last_opened.as_deref() == Some(locator.as_str()) {
                    assert!(actions.is_empty(), "reopening the shown source acted");
                    assert_eq!(viewer.state(), &before);
                    assert_eq!(viewer.generation(), generation);
                }
                last_opened = Some(locator);
                false
            },
            Op::Finish { generation_offset, slides, failure } => {
                let generation =
                    viewer.generation().wrapping_add_signed(i64::from(generation_offset));
                let result = match failure {
                    Some(Failure::Checked(message)) => PresentationResult::failed(message),
                    Some(Failure::Raw(message)) => PresentationResult::Failed { message },
                    None => {
                        let slides =
                            (0..slides).map(|i| SlideRecord::new(vec![format!("Slide {i}")]));
                        PresentationResult::Loaded { slides: slides.collect() }
                    },
                };
                let _ = viewer.handle(ViewerEvent::LoadFinished { generation, result });
                false
            },
            Op::Key(k) => {
                let _ = viewer.handle(ViewerEvent::Key(key(k)));
                true
            },
            Op::Click(c) => {
                let _ = viewer.handle(ViewerEvent::Click(click(c)));
                true
            },
            Op::Next => {
                let _ = viewer.next();
                true
            },
            Op::Previous => {
                let _ = viewer.previous();
                true
            },
            Op::JumpTo(i) => {
                let _ = viewer.jump_to(i as usize);
                true
            },
            Op::Tick => {
                let _ = viewer.handle(ViewerEvent::Tick);
                true
            },
            Op::Resize(cols, rows) => {
                let _ = viewer.handle(ViewerEvent::Resize(cols, rows));
                true
            },
        };

        let state = viewer.state();

        if navigating && before.status() != ViewStatus::Ready {
            assert_eq!(state, &before, "state changed outside Ready");
        }

        match state.status() {
            ViewStatus::Ready => {
                if state.slide_count() == 0 {
                    assert_eq!(state.current_index(), 0);
                } else {
                    assert!(state.current_index() < state.slide_count());
                }
            },
            ViewStatus::Error => {
                assert!(state.error_message().is_some_and(|m| !m.is_empty()));
            },
            ViewStatus::Loading => {},
        }

        assert_eq!(viewer.source().map(|s| s.as_str().to_string()), last_opened);
    }
});
