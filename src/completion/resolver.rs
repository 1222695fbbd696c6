//! Completion resolution
//!
//! Turns the current line and cursor word into the suggestion list:
//! root commands, a command's flag table, live containers, or catalog
//! images. Static lists are prefix-filtered by the cursor word; live and
//! catalog lists are returned as fetched.

use std::sync::Arc;

use super::cache::{CacheKey, SuggestionCache};
use super::catalog::CatalogSearch;
use super::context::extract_context;
use super::flag_table::{flags_for, root_commands};
use super::resources::ResourceLister;
use super::suggestion::{Suggestion, filter_has_prefix};
use crate::config::Config;
use crate::runtime::ContainerRuntime;

/// Where suggestions for a recognized command come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSource {
    /// Containers from the runtime; stopped ones only when the flag is set
    Containers { include_stopped: bool },
    /// Image names from the catalog
    Images,
    /// The command's static flag table
    Flags,
}

/// Source for a bare command name
pub fn source_for(command: &str) -> SuggestionSource {
    match command {
        "exec" | "stop" | "port" => SuggestionSource::Containers {
            include_stopped: false,
        },
        "start" => SuggestionSource::Containers {
            include_stopped: true,
        },
        "pull" => SuggestionSource::Images,
        _ => SuggestionSource::Flags,
    }
}

/// Resolves input lines into suggestion lists
pub struct CompletionResolver {
    resources: ResourceLister,
    catalog: CatalogSearch,
    cache: SuggestionCache,
    search_limit: usize,
}

impl CompletionResolver {
    pub fn new(
        resources: ResourceLister,
        catalog: CatalogSearch,
        cache: SuggestionCache,
        search_limit: usize,
    ) -> Self {
        Self {
            resources,
            catalog,
            cache,
            search_limit,
        }
    }

    /// Builds a resolver over `runtime` with timeouts, endpoint and cache
    /// windows taken from `config`.
    pub fn from_config(runtime: Arc<dyn ContainerRuntime>, config: &Config) -> Self {
        let resources = ResourceLister::new(Arc::clone(&runtime), config.runtime.timeout());
        let catalog = CatalogSearch::new(
            runtime,
            config.catalog.hub_url.clone(),
            config.catalog.timeout(),
        );
        let cache = SuggestionCache::new(config.cache.stale_after(), config.cache.purge_after());
        Self::new(resources, catalog, cache, config.catalog.page_size)
    }

    pub fn cache(&self) -> &SuggestionCache {
        &self.cache
    }

    /// Suggestions for `line` with `word` under the cursor
    pub async fn resolve(&self, line: &str, word: &str) -> Vec<Suggestion> {
        let Some(context) = extract_context(line) else {
            return filter_has_prefix(root_commands(), word);
        };

        #[cfg(debug_assertions)]
        log::debug!("Resolved context {:?} for word {:?}", context, word);

        match source_for(context.command) {
            SuggestionSource::Containers { include_stopped } => {
                self.resources.list_resources(include_stopped).await
            }
            SuggestionSource::Images => {
                let term = if word == context.command { "" } else { word };
                let key = CacheKey::for_term(term);
                self.cache
                    .get_or_compute(key, || self.catalog.search_catalog(term, self.search_limit))
                    .await
            }
            SuggestionSource::Flags => match flags_for(&context.key()) {
                Some(flags) => filter_has_prefix(flags, word),
                None => filter_has_prefix(root_commands(), word),
            },
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
