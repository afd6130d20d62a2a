//! Viewer state machine.
//!
//! This module defines the [`Viewer`] state machine, which manages the
//! slideshow completely decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::ViewerEvent`] inputs and
//! produces [`crate::ViewerAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Runs the load cycle: Loading, then Ready or Error.
//! - Discards completions of superseded loads (generation check).
//! - Keeps the current slide index within the deck bounds.
//! - Requests exactly one render per accepted change.

use crate::{
    ClickTarget, KeyBinding, PresentationResult, SlideRecord, SourceLocator, ViewState, ViewStatus,
    ViewerAction, ViewerCommand, ViewerConfig, ViewerEvent,
    render::{self, Navigation, VisualTree},
};

/// Slideshow state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable without a display or network.
#[derive(Debug, Clone)]
pub struct Viewer {
    /// Display options.
    config: ViewerConfig,
    /// Deck being shown. `None` until the first load starts.
    source: Option<SourceLocator>,
    /// Status, index and slide count.
    state: ViewState,
    /// Slides of the loaded deck. Empty unless Ready.
    slides: Vec<SlideRecord>,
    /// Generation of the most recently started load.
    generation: u64,
}

impl Viewer {
    /// Create a viewer with no deck.
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            source: None,
            state: ViewState::loading(),
            slides: Vec::new(),
            generation: 0,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: ViewerEvent) -> Vec<ViewerAction> {
        match event {
            ViewerEvent::Tick => vec![],
            ViewerEvent::Resize(..) => vec![ViewerAction::Render],
            ViewerEvent::Open(locator) => self.open(locator),
            ViewerEvent::LoadFinished { generation, result } => {
                self.finish_load(generation, result)
            },
            ViewerEvent::Key(key) => match KeyBinding::resolve(key) {
                Some(binding) => self.apply(binding.command),
                None => vec![],
            },
            ViewerEvent::Click(target) => self.apply(match target {
                ClickTarget::Previous => ViewerCommand::Previous,
                ClickTarget::Next => ViewerCommand::Next,
                ClickTarget::Marker(index) => ViewerCommand::JumpTo(index),
                ClickTarget::Close => ViewerCommand::Close,
            }),
        }
    }

    /// Start a new load cycle for `locator`.
    ///
    /// Any load still in flight becomes stale. Opening the deck that is
    /// already shown (or loading) is a no-op.
    pub fn open(&mut self, locator: SourceLocator) -> Vec<ViewerAction> {
        if self.source.as_ref() == Some(&locator) {
            tracing::debug!(generation = self.generation, %locator, "Source unchanged");
            return vec![];
        }

        self.generation = self.generation.wrapping_add(1);
        self.state = ViewState::loading();
        self.slides.clear();
        self.source = Some(locator.clone());

        tracing::debug!(generation = self.generation, %locator, "Load cycle started");
        vec![ViewerAction::Load { generation: self.generation, locator }, ViewerAction::Render]
    }

    /// Advance one slide. No-op on the last slide or outside Ready.
    pub fn next(&mut self) -> Vec<ViewerAction> {
        if self.state.at_last() {
            return vec![];
        }
        self.jump_to(self.state.current_index().saturating_add(1))
    }

    /// Go back one slide. No-op on the first slide or outside Ready.
    pub fn previous(&mut self) -> Vec<ViewerAction> {
        if self.state.at_first() {
            return vec![];
        }
        self.jump_to(self.state.current_index().saturating_sub(1))
    }

    /// Show slide `index`. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> Vec<ViewerAction> {
        if self.state.set_index(index) {
            vec![ViewerAction::Render]
        } else {
            vec![]
        }
    }

    /// Ask the owning context to close the viewer. Valid in any state.
    pub fn close(&self) -> Vec<ViewerAction> {
        vec![ViewerAction::Close]
    }

    fn apply(&mut self, command: ViewerCommand) -> Vec<ViewerAction> {
        if command != ViewerCommand::Close && self.state.status() != ViewStatus::Ready {
            tracing::debug!(?command, status = ?self.state.status(), "Ignoring input");
            return vec![];
        }

        match command {
            ViewerCommand::Next => self.next(),
            ViewerCommand::Previous => self.previous(),
            ViewerCommand::JumpTo(index) => self.jump_to(index),
            ViewerCommand::Close => self.close(),
        }
    }

    fn finish_load(&mut self, generation: u64, result: PresentationResult) -> Vec<ViewerAction> {
        let awaiting = self.source.is_some() && self.state.status() == ViewStatus::Loading;
        if generation != self.generation || !awaiting {
            tracing::debug!(generation, current = self.generation, "Discarding stale load");
            return vec![];
        }

        match result {
            PresentationResult::Loaded { slides } => {
                self.state = ViewState::ready(slides.len());
                self.slides = slides;
            },
            PresentationResult::Failed { message } => {
                self.state = ViewState::failed(message);
            },
        }
        vec![ViewerAction::Render]
    }

    /// Status, index and slide count.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Display options.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Title shown in the header.
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Deck being shown. `None` before the first load.
    pub fn source(&self) -> Option<&SourceLocator> {
        self.source.as_ref()
    }

    /// Generation of the most recently started load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Slides of the loaded deck. Empty unless Ready.
    pub fn slides(&self) -> &[SlideRecord] {
        &self.slides
    }

    /// Displayed slide. `None` unless Ready with at least one slide.
    pub fn current_slide(&self) -> Option<&SlideRecord> {
        match self.state.status() {
            ViewStatus::Ready => self.slides.get(self.state.current_index()),
            ViewStatus::Loading | ViewStatus::Error => None,
        }
    }

    /// Rendering of the displayed slide. `None` unless Ready with slides.
    pub fn current_visual(&self) -> Option<VisualTree> {
        let slide = self.current_slide()?;
        Some(render::render(Some(slide), self.state.current_index(), self.state.slide_count()))
    }

    /// Navigation controls. `None` unless Ready.
    pub fn navigation(&self) -> Option<Navigation> {
        match self.state.status() {
            ViewStatus::Ready => {
                Some(render::navigation(self.state.current_index(), self.state.slide_count()))
            },
            ViewStatus::Loading | ViewStatus::Error => None,
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}
