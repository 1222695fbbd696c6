//! Shared test utilities for dockprompt
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::completion::{CatalogSearch, CompletionResolver, ResourceLister, SuggestionCache};
    use crate::runtime::{ContainerRuntime, ContainerSummary, ImageSummary, RuntimeError};

    /// Hub address nothing listens on
    pub const UNREACHABLE_HUB: &str = "http://127.0.0.1:9";

    /// In-memory runtime that records every call it receives
    #[derive(Default)]
    pub struct StubRuntime {
        pub running: Vec<ContainerSummary>,
        pub stopped: Vec<ContainerSummary>,
        pub images: Vec<ImageSummary>,
        pub fail: bool,
        pub delay: Option<Duration>,
        list_calls: Mutex<Vec<bool>>,
        search_calls: Mutex<Vec<(String, usize)>>,
    }

    impl StubRuntime {
        pub fn new() -> Self {
            Self::default()
        }

        /// Runtime with two running and one stopped container
        pub fn with_containers() -> Self {
            Self {
                running: vec![container("a1b2c3", "nginx:latest"), container("d4e5f6", "redis:7")],
                stopped: vec![container("0f9e8d", "postgres:16")],
                ..Self::default()
            }
        }

        /// Runtime whose search returns one official and one community image
        pub fn with_images() -> Self {
            Self {
                images: vec![
                    image("ubuntu", "Ubuntu is a Debian-based Linux", true),
                    image("someone/ubuntu-dev", "Ubuntu with build tools", false),
                ],
                ..Self::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn delayed(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        /// `include_stopped` flag of every listing call, in order
        pub fn list_calls(&self) -> Vec<bool> {
            self.list_calls.lock().unwrap().clone()
        }

        /// `(term, limit)` of every search call, in order
        pub fn search_calls(&self) -> Vec<(String, usize)> {
            self.search_calls.lock().unwrap().clone()
        }

        async fn pause(&self) {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
        }

        fn failure(&self) -> RuntimeError {
            RuntimeError::Failed {
                status: Some(1),
                stderr: "Cannot connect to the Docker daemon".to_string(),
            }
        }
    }

    #[async_trait]
    impl ContainerRuntime for StubRuntime {
        async fn list_containers(
            &self,
            include_stopped: bool,
        ) -> Result<Vec<ContainerSummary>, RuntimeError> {
            self.list_calls.lock().unwrap().push(include_stopped);
            self.pause().await;
            if self.fail {
                return Err(self.failure());
            }

            let mut containers = self.running.clone();
            if include_stopped {
                containers.extend(self.stopped.iter().cloned());
            }
            Ok(containers)
        }

        async fn search_images(
            &self,
            term: &str,
            limit: usize,
        ) -> Result<Vec<ImageSummary>, RuntimeError> {
            self.search_calls
                .lock()
                .unwrap()
                .push((term.to_string(), limit));
            self.pause().await;
            if self.fail {
                return Err(self.failure());
            }

            Ok(self.images.iter().take(limit).cloned().collect())
        }

        async fn ping(&self) -> Result<String, RuntimeError> {
            self.pause().await;
            if self.fail {
                return Err(self.failure());
            }
            Ok("27.3.1".to_string())
        }
    }

    pub fn container(id: &str, image: &str) -> ContainerSummary {
        ContainerSummary {
            id: id.to_string(),
            image: image.to_string(),
        }
    }

    pub fn image(name: &str, description: &str, is_official: bool) -> ImageSummary {
        ImageSummary {
            name: name.to_string(),
            description: description.to_string(),
            is_official,
        }
    }

    /// Resolver over `runtime` with short timeouts and an unreachable hub
    pub fn stub_resolver(runtime: StubRuntime) -> CompletionResolver {
        let runtime = std::sync::Arc::new(runtime);
        let timeout = Duration::from_millis(200);
        CompletionResolver::new(
            ResourceLister::new(runtime.clone(), timeout),
            CatalogSearch::new(runtime, UNREACHABLE_HUB, timeout),
            SuggestionCache::default(),
            10,
        )
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
