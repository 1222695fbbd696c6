pub mod cache;
pub mod catalog;
mod context;
pub mod flag_table;
pub mod resolver;
pub mod resources;
mod suggestion;

pub use cache::{CacheKey, SuggestionCache};
pub use catalog::CatalogSearch;
pub use context::{CommandContext, extract_context, is_known_command};
pub use flag_table::{flags_for, root_commands};
pub use resolver::{CompletionResolver, SuggestionSource};
pub use resources::ResourceLister;
pub use suggestion::{Suggestion, filter_has_prefix, word_before_cursor};
