//! # Core Application Logic
//!
//! This module contains Sprout's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Config (settings)    │
//!                    │                         │
//!                    │  No UI. Reducer is pure.│
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    Web     │
//!            │  Adapter   │            │  Adapter   │
//!            │ (ratatui)  │            │  (future)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum plus the `update()` reducer
//! - [`config`]: Settings file, env vars, and the override hierarchy

pub mod action;
pub mod config;
pub mod state;

// Re-export commonly used types for convenience
// pub use action::Action;
// pub use state::App;
