//! Remote wallpaper image loading
//!
//! Images are fetched once per session and handed to iced as in-memory
//! handles. There is no disk cache and no retry: a failed fetch stays failed
//! and the tile shows a neutral placeholder.

use iced::widget::image;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{Error, Result};

/// Load state of one remote image
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Loaded(image::Handle),
    Failed,
}

/// Per-URL image state for the current session
#[derive(Debug)]
pub struct ImageCache {
    client: reqwest::Client,
    images: HashMap<String, Thumbnail>,
}

impl ImageCache {
    pub fn new(timeout: Duration) -> Self {
        // Builder only fails if the TLS backend cannot initialise
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!("⚠️  HTTP client fallback without timeout: {}", err);
                reqwest::Client::new()
            });

        Self {
            client,
            images: HashMap::new(),
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Mark a URL as requested. Returns false if it was already known.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.images.contains_key(url) {
            return false;
        }
        self.images.insert(url.to_string(), Thumbnail::Loading);
        true
    }

    pub fn finish(&mut self, url: String, result: Result<Vec<u8>>) {
        let state = match result {
            Ok(bytes) => Thumbnail::Loaded(image::Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::warn!("⚠️  {}", err);
                Thumbnail::Failed
            }
        };
        self.images.insert(url, state);
    }

    /// `None` means the image was never requested
    pub fn get(&self, url: &str) -> Option<&Thumbnail> {
        self.images.get(url)
    }
}

/// Fetch raw image bytes. Decoding is left to the renderer.
pub async fn fetch_image(client: reqwest::Client, url: String) -> Result<Vec<u8>> {
    let http_error = |message: String| Error::Http {
        url: url.clone(),
        message,
    };

    let response = client
        .get(&url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| http_error(e.to_string()))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| http_error(e.to_string()))?;

    tracing::debug!("📥 Fetched {} ({} KB)", url, bytes.len() / 1024);
    Ok(bytes.to_vec())
}
