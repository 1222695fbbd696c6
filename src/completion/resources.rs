use std::sync::Arc;
use std::time::Duration;

use super::suggestion::Suggestion;
use crate::runtime::{ContainerRuntime, bounded};

/// Lists live containers as suggestions
#[derive(Clone)]
pub struct ResourceLister {
    runtime: Arc<dyn ContainerRuntime>,
    timeout: Duration,
}

impl ResourceLister {
    pub fn new(runtime: Arc<dyn ContainerRuntime>, timeout: Duration) -> Self {
        Self { runtime, timeout }
    }

    /// Current containers as `{id, image}` suggestions.
    ///
    /// Running containers only unless `include_stopped` is set. Any failure,
    /// including the timeout, yields an empty list.
    pub async fn list_resources(&self, include_stopped: bool) -> Vec<Suggestion> {
        match bounded(self.timeout, self.runtime.list_containers(include_stopped)).await {
            Ok(containers) => containers
                .into_iter()
                .map(|c| Suggestion::new(c.id, c.image))
                .collect(),
            Err(e) => {
                log::warn!("Container listing failed: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "resources_tests.rs"]
mod resources_tests;
