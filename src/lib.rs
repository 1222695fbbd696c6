//! dockprompt library - Interactive docker prompt with live completion
//!
//! This library exposes the completion engine and prompt of dockprompt for
//! the binary and for testing purposes.

pub mod completion;
pub mod config;
pub mod error;
pub mod prompt;
pub mod runtime;
pub mod theme;

#[cfg(test)]
pub mod test_utils;
pub mod widgets;

// Re-export commonly used types for convenience
pub use completion::{CompletionResolver, Suggestion};
pub use config::Config;
pub use prompt::Prompt;
pub use runtime::{ContainerRuntime, DockerCli};
