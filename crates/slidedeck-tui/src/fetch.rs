//! Byte sources for decks.
//!
//! `http://` and `https://` locators are downloaded with reqwest; anything
//! else is read from the local filesystem. A `file://` prefix is accepted and
//! stripped.

use std::io;

use slidedeck_app::{Fetch, FetchError, SourceLocator};

/// [`Fetch`] over local files and HTTP(S).
#[derive(Debug, Clone, Default)]
pub struct SourceFetcher {
    http: reqwest::Client,
}

impl SourceFetcher {
    /// Create a fetcher with a default HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    async fn download(&self, locator: &SourceLocator) -> Result<Vec<u8>, FetchError> {
        let response = self
            .http
            .get(locator.as_str())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                locator: locator.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Network(e.to_string()))?;
        tracing::debug!(%locator, bytes = body.len(), "Downloaded deck");
        Ok(body.to_vec())
    }

    async fn read_file(&self, locator: &SourceLocator) -> Result<Vec<u8>, FetchError> {
        let path = locator.as_str().strip_prefix("file://").unwrap_or(locator.as_str());

        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(FetchError::NotFound(locator.to_string()))
            },
            Err(e) => Err(e.into()),
        }
    }
}

impl Fetch for SourceFetcher {
    async fn fetch(&self, locator: &SourceLocator) -> Result<Vec<u8>, FetchError> {
        if locator.is_remote() {
            self.download(locator).await
        } else {
            self.read_file(locator).await
        }
    }
}
