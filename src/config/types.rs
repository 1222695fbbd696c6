// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::completion::cache::{DEFAULT_PURGE_AFTER, DEFAULT_STALE_AFTER};

/// Public Docker Hub endpoint
pub const DEFAULT_HUB_URL: &str = "https://registry.hub.docker.com";

/// Runtime section: which binary to drive and how long to wait for it
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    #[serde(default = "default_binary")]
    pub binary: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_startup_timeout_secs")]
    pub startup_timeout_secs: u64,
}

fn default_binary() -> String {
    "docker".to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_startup_timeout_secs() -> u64 {
    15
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            binary: default_binary(),
            timeout_ms: default_timeout_ms(),
            startup_timeout_secs: default_startup_timeout_secs(),
        }
    }
}

impl RuntimeConfig {
    /// Bound for per-keystroke runtime queries
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Bound for the one-time connectivity check
    pub fn startup_timeout(&self) -> Duration {
        Duration::from_secs(self.startup_timeout_secs)
    }
}

/// Catalog section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(default = "default_hub_url")]
    pub hub_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_hub_url() -> String {
    DEFAULT_HUB_URL.to_string()
}

fn default_page_size() -> usize {
    10
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            hub_url: default_hub_url(),
            page_size: default_page_size(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Cache section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    #[serde(default = "default_stale_after_secs")]
    pub stale_after_secs: u64,
    #[serde(default = "default_purge_after_secs")]
    pub purge_after_secs: u64,
}

fn default_stale_after_secs() -> u64 {
    DEFAULT_STALE_AFTER.as_secs()
}

fn default_purge_after_secs() -> u64 {
    DEFAULT_PURGE_AFTER.as_secs()
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            stale_after_secs: default_stale_after_secs(),
            purge_after_secs: default_purge_after_secs(),
        }
    }
}

impl CacheConfig {
    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.stale_after_secs)
    }

    pub fn purge_after(&self) -> Duration {
        Duration::from_secs(self.purge_after_secs)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
