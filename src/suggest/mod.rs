pub mod prompt;
pub mod provider;
pub mod providers;

pub use prompt::{build_prompt, parse_idea_list};
pub use provider::{ProviderError, SuggestionProvider, SuggestionRequest};
pub use providers::GeminiProvider;
