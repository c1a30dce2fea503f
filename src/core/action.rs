//! # Actions
//!
//! Everything that can happen in Sprout becomes an `Action`.
//! User presses Enter? That's `Action::Submit(seed)`.
//! API responds? That's `Action::IdeasReceived(ideas)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller should
//! perform. No side effects here. I/O happens in the TUI layer.
//!
//! ```text
//! State + Action  →  update()  →  mutated State + Effect
//! ```
//!
//! This makes everything testable: feed actions in, assert on the state and
//! the returned effect. And debuggable: log every action, replay the session.

use crate::core::state::App;
use crate::session::Identity;

// ============================================================================
// Action & Effect Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User submitted the input box contents as a seed keyword.
    Submit(String),
    /// A generation request finished with a parsed idea list.
    IdeasReceived(Vec<String>),
    /// A generation request failed; payload is the user-facing message.
    GenerationFailed(String),
    /// The session bootstrap resolved. `notice` carries a user-facing
    /// warning when the broker failed and a local id was minted instead.
    IdentityResolved {
        identity: Identity,
        notice: Option<String>,
    },
    /// User asked to copy an idea to the clipboard.
    CopyIdea(String),
    Quit,
}

/// Side effects `update()` asks the caller to perform. The reducer itself
/// never touches the network, the clipboard, or the terminal.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    /// Spawn a background generation request for `app.seed`.
    SpawnGeneration,
    CopyToClipboard(String),
    Quit,
}

pub const EMPTY_SEED_ERROR: &str = "Please enter a seed keyword.";

// ============================================================================
// Update Function
// ============================================================================

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            let seed = text.trim();
            if seed.is_empty() {
                app.error = Some(String::from(EMPTY_SEED_ERROR));
                return Effect::None;
            }
            // A fresh request invalidates whatever the last one produced.
            app.seed = seed.to_string();
            app.ideas.clear();
            app.error = None;
            app.is_loading = true;
            app.status_message = format!("Generating ideas for \"{}\"", app.seed);
            Effect::SpawnGeneration
        }
        Action::IdeasReceived(ideas) => {
            app.is_loading = false;
            app.status_message = match ideas.len() {
                1 => String::from("1 idea"),
                n => format!("{n} ideas"),
            };
            app.ideas = ideas;
            Effect::None
        }
        Action::GenerationFailed(message) => {
            app.is_loading = false;
            app.error = Some(message);
            Effect::None
        }
        Action::IdentityResolved { identity, notice } => {
            // Assigned exactly once. A late duplicate resolution is dropped.
            if app.identity.is_none() {
                app.identity = Some(identity);
                if let Some(notice) = notice {
                    app.error = Some(notice);
                }
            }
            Effect::None
        }
        Action::CopyIdea(text) => Effect::CopyToClipboard(text),
        Action::Quit => Effect::Quit,
    }
}

// ============================================================================
// Tests
// ============================================================================
