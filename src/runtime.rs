//! Container runtime abstraction
//!
//! Defines the `ContainerRuntime` trait the completion engine queries for
//! live state, the summaries it returns, and `RuntimeError`. The shipped
//! implementation drives the `docker` CLI; tests substitute stubs.

use async_trait::async_trait;
use thiserror::Error;

mod docker_cli;

pub use docker_cli::DockerCli;

/// Errors from runtime queries
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RuntimeError {
    /// The runtime binary is not installed or not on PATH
    #[error("runtime binary '{0}' not found")]
    NotFound(String),

    /// The runtime process could not be started
    #[error("failed to spawn runtime: {0}")]
    Spawn(String),

    /// The query did not finish in time
    #[error("runtime query timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The runtime exited unsuccessfully
    #[error("runtime exited with status {status:?}: {stderr}")]
    Failed { status: Option<i32>, stderr: String },

    /// Runtime output could not be decoded
    #[error("failed to decode runtime output: {0}")]
    Decode(String),
}

/// A container known to the runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSummary {
    pub id: String,
    pub image: String,
}

/// An image found by a catalog listing or a runtime search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSummary {
    pub name: String,
    pub description: String,
    pub is_official: bool,
}

/// Live queries against a connected container runtime.
///
/// Implementations report failures as `RuntimeError`; callers on the
/// completion path bound each call with a timeout and treat errors as
/// "no suggestions".
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// List containers. Only running ones unless `include_stopped` is set.
    async fn list_containers(
        &self,
        include_stopped: bool,
    ) -> Result<Vec<ContainerSummary>, RuntimeError>;

    /// Search the runtime's configured registry for images matching `term`.
    async fn search_images(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<ImageSummary>, RuntimeError>;

    /// Check that the runtime daemon answers. Returns its server version.
    async fn ping(&self) -> Result<String, RuntimeError>;
}

/// Runs `fut` with an upper bound, mapping expiry to `RuntimeError::Timeout`
pub async fn bounded<T>(
    limit: std::time::Duration,
    fut: impl std::future::Future<Output = Result<T, RuntimeError>>,
) -> Result<T, RuntimeError> {
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(RuntimeError::Timeout(limit)),
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod runtime_tests;
