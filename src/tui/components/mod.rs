//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! Two patterns are in use:
//!
//! - **Stateless, props-based**: `TitleBar` receives all data as props and
//!   just renders it.
//! - **Stateful, event-driven**: `InputBox` owns its text buffer and cursor;
//!   `IdeaList` borrows persistent selection state from `TuiState` each frame.
//!
//! Each component file is self-contained: state types, event types,
//! rendering, event handling, and tests all live together.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── title_bar.rs   (top status bar)
//! ├── idea_list.rs   (selectable list of generated ideas)
//! └── input_box.rs   (single-line seed keyword editor)
//! ```

mod idea_list;
mod input_box;
mod title_bar;

pub use idea_list::{IdeaList, IdeaListState};
pub use input_box::{InputBox, InputEvent};
pub use title_bar::TitleBar;
