//! Property-based tests for the Viewer state machine.
//!
//! Tests verify that navigation bounds and load ordering hold under arbitrary
//! input sequences.

use proptest::prelude::*;
use slidedeck_app::{
    ClickTarget, KeyInput, PresentationResult, SlideRecord, ViewStatus, Viewer, ViewerAction,
    ViewerEvent,
};

/// User operations on a ready viewer.
#[derive(Debug, Clone)]
enum Op {
    Next,
    Previous,
    JumpTo(usize),
    Key(KeyInput),
    Click(ClickTarget),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Next),
        3 => Just(Op::Previous),
        2 => (0usize..40).prop_map(Op::JumpTo),
        1 => prop_oneof![
            Just(KeyInput::Right),
            Just(KeyInput::Left),
            Just(KeyInput::Char(' ')),
            Just(KeyInput::Up),
            Just(KeyInput::Enter),
        ]
        .prop_map(Op::Key),
        1 => prop_oneof![
            Just(ClickTarget::Previous),
            Just(ClickTarget::Next),
            (0usize..40).prop_map(ClickTarget::Marker),
        ]
        .prop_map(Op::Click),
    ]
}

fn deck(n: usize) -> Vec<SlideRecord> {
    (1..=n).map(|k| SlideRecord::new(vec![format!("Slide {k}")])).collect()
}

fn ready_viewer(n: usize) -> Viewer {
    let mut viewer = Viewer::default();
    let _ = viewer.open("deck.pptx".into());
    let generation = viewer.generation();
    let _ = viewer.handle(ViewerEvent::LoadFinished {
        generation,
        result: PresentationResult::Loaded { slides: deck(n) },
    });
    viewer
}

fn apply(viewer: &mut Viewer, op: Op) -> Vec<ViewerAction> {
    match op {
        Op::Next => viewer.next(),
        Op::Previous => viewer.previous(),
        Op::JumpTo(i) => viewer.jump_to(i),
        Op::Key(key) => viewer.handle(ViewerEvent::Key(key)),
        Op::Click(target) => viewer.handle(ViewerEvent::Click(target)),
    }
}

proptest! {
    #[test]
    fn prop_index_stays_in_bounds(
        n in 1usize..20,
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut viewer = ready_viewer(n);

        for op in ops {
            let before = viewer.state().current_index();
            let actions = apply(&mut viewer, op);
            let after = viewer.state().current_index();

            prop_assert!(after < n);
            prop_assert_eq!(viewer.state().slide_count(), n);
            // A render is requested exactly when the index changed.
            prop_assert_eq!(actions.contains(&ViewerAction::Render), before != after);
        }
    }

    #[test]
    fn prop_clamped_at_both_ends(n in 1usize..20) {
        let mut viewer = ready_viewer(n);

        prop_assert!(viewer.previous().is_empty());
        prop_assert_eq!(viewer.state().current_index(), 0);

        let _ = viewer.jump_to(n - 1);
        prop_assert!(viewer.next().is_empty());
        prop_assert_eq!(viewer.state().current_index(), n - 1);
    }

    #[test]
    fn prop_successful_load_starts_at_first_slide(n in 0usize..30) {
        let viewer = ready_viewer(n);

        prop_assert_eq!(viewer.state().status(), ViewStatus::Ready);
        prop_assert_eq!(viewer.state().slide_count(), n);
        prop_assert_eq!(viewer.state().current_index(), 0);
    }

    #[test]
    fn prop_failed_load_has_message(message in ".*", raw in any::<bool>()) {
        let mut viewer = Viewer::default();
        let _ = viewer.open("deck.pptx".into());
        let result = if raw {
            PresentationResult::Failed { message }
        } else {
            PresentationResult::failed(message)
        };
        let _ = viewer.handle(ViewerEvent::LoadFinished {
            generation: viewer.generation(),
            result,
        });

        prop_assert_eq!(viewer.state().status(), ViewStatus::Error);
        prop_assert!(viewer.state().error_message().is_some_and(|m| !m.is_empty()));
    }

    #[test]
    fn prop_only_latest_load_is_reflected(
        order in (1u64..6).prop_flat_map(|k| Just((1..=k).collect::<Vec<_>>()).prop_shuffle())
    ) {
        let latest = order.len() as u64;
        let mut viewer = Viewer::default();
        for generation in 1..=latest {
            let _ = viewer.open(format!("deck-{generation}.pptx").into());
        }

        for generation in order {
            let _ = viewer.handle(ViewerEvent::LoadFinished {
                generation,
                result: PresentationResult::Loaded { slides: deck(generation as usize) },
            });
        }

        prop_assert_eq!(viewer.state().status(), ViewStatus::Ready);
        prop_assert_eq!(viewer.state().slide_count() as u64, latest);
        let expected = format!("deck-{latest}.pptx");
        prop_assert_eq!(viewer.source().map(|s| s.as_str().to_string()), Some(expected));
    }

    #[test]
    fn prop_input_ignored_while_loading(keys in prop::collection::vec(
        prop_oneof![Just(KeyInput::Right), Just(KeyInput::Left), Just(KeyInput::Char(' '))],
        0..20,
    )) {
        let mut viewer = Viewer::default();
        let _ = viewer.open("deck.pptx".into());

        for key in keys {
            prop_assert!(viewer.handle(ViewerEvent::Key(key)).is_empty());
        }
        prop_assert_eq!(viewer.state().status(), ViewStatus::Loading);
    }
}

#[test]
fn three_slide_walkthrough() {
    let mut viewer = ready_viewer(3);
    assert_eq!(viewer.state().current_index(), 0);

    let _ = viewer.next();
    let _ = viewer.next();
    assert_eq!(viewer.state().current_index(), 2);

    let _ = viewer.next();
    assert_eq!(viewer.state().current_index(), 2);

    let _ = viewer.jump_to(0);
    assert_eq!(viewer.state().current_index(), 0);

    let tree = slidedeck_app::render::render(viewer.slides().get(1), 1, 3);
    assert_eq!(tree.body, slidedeck_app::SlideBody::Text {
        heading: "Slide 2".to_string(),
        lines: vec![],
    });
}

#[test]
fn image_only_deck_renders_slide_number() {
    let mut viewer = Viewer::default();
    let _ = viewer.open("photos.pptx".into());
    let _ = viewer.handle(ViewerEvent::LoadFinished {
        generation: viewer.generation(),
        result: PresentationResult::Loaded { slides: vec![SlideRecord::empty()] },
    });

    assert_eq!(viewer.state().status(), ViewStatus::Ready);
    assert_eq!(viewer.state().slide_count(), 1);
    assert_eq!(viewer.state().current_index(), 0);

    let tree = slidedeck_app::render::render(viewer.current_slide(), 0, 1);
    assert_eq!(tree.body, slidedeck_app::SlideBody::Fallback {
        label: "1".to_string(),
        caption: slidedeck_app::render::FALLBACK_CAPTION,
    });
}
