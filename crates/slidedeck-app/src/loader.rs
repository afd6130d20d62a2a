//! Deck loading.
//!
//! The [`Loader`] turns a [`SourceLocator`] into a [`PresentationResult`] by
//! running two injected capabilities in sequence:
//!
//! - [`Fetch`]: read the raw bytes behind a locator (file, HTTP, ...)
//! - [`Decode`]: parse those bytes into an ordered list of [`SlideRecord`]s
//!
//! Every failure is caught at the load boundary and converted into
//! [`PresentationResult::Failed`]. A load makes exactly one fetch call; there
//! is no caching and no retry.

use std::{future::Future, sync::Arc};

use futures::{FutureExt, future::LocalBoxFuture};
use thiserror::Error;

use crate::{PresentationResult, SlideRecord, SourceLocator, ViewerEvent};

/// Errors from the fetch capability.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Nothing exists at the locator.
    #[error("source not found: {0}")]
    NotFound(String),

    /// Local read failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Remote source unreachable or the transfer broke off.
    #[error("network error: {0}")]
    Network(String),

    /// Remote source answered with a non-success status.
    #[error("unexpected HTTP status {status} from {locator}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested locator.
        locator: String,
    },
}

/// Error from the decode capability: the bytes are not a usable deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DecodeError {
    message: String,
}

impl DecodeError {
    /// Create a decode error with a diagnostic message.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failure of a single load attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Bytes could not be fetched.
    #[error("failed to fetch presentation: {0}")]
    Fetch(#[from] FetchError),

    /// Bytes were fetched but are not a valid deck.
    #[error("failed to decode presentation: {0}")]
    Decode(#[from] DecodeError),
}

/// Capability that reads the bytes behind a locator.
pub trait Fetch {
    /// Read the full contents at `locator`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the source is missing or unreachable.
    fn fetch(&self, locator: &SourceLocator) -> impl Future<Output = Result<Vec<u8>, FetchError>>;
}

/// Capability that parses deck bytes into slides.
pub trait Decode {
    /// Decode `bytes` into slides in presentation order.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] for malformed or unsupported input.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<SlideRecord>, DecodeError>;
}

/// A load in flight, resolving to the [`ViewerEvent::LoadFinished`] that
/// reports it.
pub type PendingLoad = LocalBoxFuture<'static, ViewerEvent>;

/// Fetch + decode pipeline.
///
/// Cheap to clone; capabilities are shared behind [`Arc`] so each pending
/// load owns what it needs.
pub struct Loader<F, D> {
    fetcher: Arc<F>,
    decoder: Arc<D>,
}

impl<F, D> Clone for Loader<F, D> {
    fn clone(&self) -> Self {
        Self { fetcher: Arc::clone(&self.fetcher), decoder: Arc::clone(&self.decoder) }
    }
}

impl<F, D> Loader<F, D>
where
    F: Fetch,
    D: Decode,
{
    /// Create a loader from its fetch and decode capabilities.
    pub fn new(fetcher: F, decoder: D) -> Self {
        Self { fetcher: Arc::new(fetcher), decoder: Arc::new(decoder) }
    }

    /// Fetch and decode, keeping the typed error for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Fetch`] or [`LoadError::Decode`].
    pub async fn try_load(&self, locator: &SourceLocator) -> Result<Vec<SlideRecord>, LoadError> {
        let bytes = self.fetcher.fetch(locator).await?;
        tracing::debug!(%locator, len = bytes.len(), "Fetched presentation");

        let slides = self.decoder.decode(&bytes)?;
        Ok(slides)
    }

    /// Load a deck. Never fails: errors become [`PresentationResult::Failed`].
    pub async fn load(&self, locator: &SourceLocator) -> PresentationResult {
        tracing::info!(%locator, "Loading presentation");

        match self.try_load(locator).await {
            Ok(slides) => {
                tracing::info!(%locator, slides = slides.len(), "Presentation loaded");
                PresentationResult::Loaded { slides }
            },
            Err(e) => {
                tracing::warn!(%locator, error = %e, "Presentation failed to load");
                PresentationResult::failed(e.to_string())
            },
        }
    }
}

impl<F, D> Loader<F, D>
where
    F: Fetch + 'static,
    D: Decode + 'static,
{
    /// Start a load tagged with `generation`.
    ///
    /// The returned future owns a clone of the loader and is meant to be
    /// polled on the runtime task alongside input handling.
    pub fn begin(&self, generation: u64, locator: SourceLocator) -> PendingLoad {
        let loader = self.clone();
        async move {
            let result = loader.load(&locator).await;
            ViewerEvent::LoadFinished { generation, result }
        }
        .boxed_local()
    }
}
