//! Image catalog search
//!
//! Two strategies depending on whether a search term has been typed:
//! - no term: the first page of the public Docker Hub `library` listing
//! - a term: the runtime's own `search`, bounded to `limit` results
//!
//! Both fail closed. Any transport, status, decode or timeout error is
//! logged and yields an empty list.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use thiserror::Error;

use super::suggestion::Suggestion;
use crate::runtime::{ContainerRuntime, ImageSummary, RuntimeError, bounded};

/// Path of the official-images listing on the hub
const LIBRARY_LISTING_PATH: &str = "/v2/repositories/library";

/// Namespace holding the curated official images
const OFFICIAL_NAMESPACE: &str = "library";

/// Errors from catalog queries
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Network(String),

    #[error("catalog returned HTTP {0}")]
    Status(u16),

    #[error("catalog response could not be decoded: {0}")]
    Decode(String),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// One page of the hub repository listing
#[derive(Debug, Deserialize)]
struct HubPage {
    #[serde(default)]
    results: Vec<HubRepository>,
}

#[derive(Debug, Deserialize)]
struct HubRepository {
    name: String,
    #[serde(default)]
    namespace: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    is_official: Option<bool>,
}

impl From<HubRepository> for ImageSummary {
    fn from(repo: HubRepository) -> Self {
        let is_official = repo
            .is_official
            .unwrap_or(repo.namespace.as_deref() == Some(OFFICIAL_NAMESPACE));
        ImageSummary {
            name: repo.name,
            description: repo.description.unwrap_or_default(),
            is_official,
        }
    }
}

/// Renders an image as a suggestion tagged with its official status
pub fn image_suggestion(image: ImageSummary) -> Suggestion {
    let tag = if image.is_official {
        "Official"
    } else {
        "Not Official"
    };
    Suggestion::new(image.name, format!("({}) {}", tag, image.description))
}

/// Catalog search over the hub listing and the runtime
#[derive(Clone)]
pub struct CatalogSearch {
    client: Client,
    hub_url: String,
    runtime: Arc<dyn ContainerRuntime>,
    timeout: Duration,
}

impl CatalogSearch {
    pub fn new(
        runtime: Arc<dyn ContainerRuntime>,
        hub_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            hub_url: hub_url.into().trim_end_matches('/').to_string(),
            runtime,
            timeout,
        }
    }

    /// Image-name suggestions for `term`, at most `limit` of them.
    pub async fn search_catalog(&self, term: &str, limit: usize) -> Vec<Suggestion> {
        let result = if term.is_empty() {
            self.fetch_listing(limit).await
        } else {
            self.search_runtime(term, limit).await
        };

        match result {
            Ok(images) => images.into_iter().map(image_suggestion).collect(),
            Err(e) => {
                log::warn!("Catalog search for '{}' failed: {}", term, e);
                Vec::new()
            }
        }
    }

    /// First page of the official-images listing
    async fn fetch_listing(&self, limit: usize) -> Result<Vec<ImageSummary>, CatalogError> {
        let url = format!("{}{}", self.hub_url, LIBRARY_LISTING_PATH);

        #[cfg(debug_assertions)]
        log::debug!("Fetching catalog listing from {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("page", "1".to_string()), ("page_size", limit.to_string())])
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let page: HubPage = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(page
            .results
            .into_iter()
            .take(limit)
            .map(ImageSummary::from)
            .collect())
    }

    async fn search_runtime(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<ImageSummary>, CatalogError> {
        let images = bounded(self.timeout, self.runtime.search_images(term, limit)).await?;
        Ok(images.into_iter().take(limit).collect())
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
