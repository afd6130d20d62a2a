//! Generic runtime for viewer orchestration.
//!
//! The Runtime drives the viewer event loop, coordinating between:
//! - [`Viewer`]: slideshow state machine
//! - [`Loader`]: fetch + decode of decks
//! - [`Driver`]: platform-specific input and display
//!
//! Everything runs on a single task. Pending loads are polled next to driver
//! input; a load that resolves after a newer one was started still produces
//! its completion event, which the Viewer then discards.

use futures::{StreamExt, stream::FuturesUnordered};

use crate::{
    Decode, Driver, Fetch, Loader, PendingLoad, SourceLocator, Viewer, ViewerAction, ViewerConfig,
};

/// Callback invoked when the user asks to close the viewer.
type CloseHandler = Box<dyn FnMut()>;

/// Generic runtime that orchestrates Viewer, Loader, and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `F`: Fetch capability
/// - `C`: Decode capability
pub struct Runtime<D, F, C>
where
    D: Driver,
    F: Fetch + 'static,
    C: Decode + 'static,
{
    driver: D,
    viewer: Viewer,
    loader: Loader<F, C>,
    pending: FuturesUnordered<PendingLoad>,
    on_close: Option<CloseHandler>,
}

impl<D, F, C> Runtime<D, F, C>
where
    D: Driver,
    F: Fetch + 'static,
    C: Decode + 'static,
{
    /// Create a new runtime with the given driver, loader and configuration.
    pub fn new(driver: D, loader: Loader<F, C>, config: ViewerConfig) -> Self {
        Self {
            driver,
            viewer: Viewer::new(config),
            loader,
            pending: FuturesUnordered::new(),
            on_close: None,
        }
    }

    /// Install the close callback.
    ///
    /// Without one, close requests are ignored and the loop keeps running
    /// until the runtime is dropped.
    #[must_use]
    pub fn with_close_handler(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    /// Start loading `locator`, superseding any load in flight.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails to render the loading screen.
    pub fn open(&mut self, locator: SourceLocator) -> Result<(), D::Error> {
        let actions = self.viewer.open(locator);
        self.process_actions(actions)?;
        Ok(())
    }

    /// Run the main event loop until the viewer is closed.
    ///
    /// Each cycle waits for either a pending load to resolve or the driver to
    /// deliver input, feeds the event to the Viewer and executes the
    /// resulting actions. Load completions win ties so input observes the
    /// most recent deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.viewer)?;

        loop {
            let event = tokio::select! {
                biased;

                Some(event) = self.pending.next(), if !self.pending.is_empty() => Some(event),
                polled = self.driver.poll_event() => polled?,
            };

            let Some(event) = event else {
                continue;
            };

            let actions = self.viewer.handle(event);
            if self.process_actions(actions)? {
                break;
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Execute actions returned by the Viewer.
    ///
    /// Returns `true` if the viewer was closed.
    fn process_actions(&mut self, actions: Vec<ViewerAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                ViewerAction::Render => {
                    if let Err(e) = self.driver.render(&self.viewer) {
                        tracing::warn!(error = %e, "Render failed");
                        return Err(e);
                    }
                },
                ViewerAction::Load { generation, locator } => {
                    self.pending.push(self.loader.begin(generation, locator));
                },
                ViewerAction::Close => match self.on_close.as_mut() {
                    Some(handler) => {
                        handler();
                        return Ok(true);
                    },
                    None => tracing::debug!("Close requested without a close handler"),
                },
            }
        }
        Ok(false)
    }

    /// Get a reference to the Viewer
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Number of loads still in flight, stale ones included.
    pub fn pending_loads(&self) -> usize {
        self.pending.len()
    }
}
