//! # Application State
//!
//! Core business state for Sprout. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn SuggestionProvider>  // generation backend
//! ├── seed: String                   // last submitted seed keyword
//! ├── ideas: Vec<String>             // current idea list
//! ├── is_loading: bool               // waiting for the API
//! ├── error: Option<String>          // shared error-banner slot
//! ├── identity: Option<Identity>     // session id, assigned once
//! ├── status_message: String         // title-bar status text
//! └── model_name: String             // current model
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::session::Identity;
use crate::suggest::SuggestionProvider;

pub struct App {
    pub provider: Arc<dyn SuggestionProvider>,
    /// Last submitted (trimmed) seed keyword. The editable buffer lives in
    /// the TUI input box; this is what the in-flight request was built from.
    pub seed: String,
    pub ideas: Vec<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Session identifier. `None` until the bootstrap resolves; never
    /// reassigned afterward.
    pub identity: Option<Identity>,
    pub status_message: String,
    pub model_name: String,
}

impl App {
    pub fn new(provider: Arc<dyn SuggestionProvider>, model_name: String) -> Self {
        Self {
            provider,
            seed: String::new(),
            ideas: Vec::new(),
            is_loading: false,
            error: None,
            identity: None,
            status_message: String::from("Welcome to Sprout!"),
            model_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Sprout!");
        assert!(!app.is_loading);
        assert!(app.ideas.is_empty());
        assert!(app.error.is_none());
        assert!(app.identity.is_none());
        assert_eq!(app.model_name, "test-model");
    }
}
