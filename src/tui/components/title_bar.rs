//! # TitleBar Component
//!
//! Top status bar showing application state.
//!
//! ## Responsibilities
//!
//! - Display the current model name
//! - Display status messages (e.g., "Generating ideas for \"espresso\"")
//! - Show the session id once the bootstrap has resolved
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state. The props come from different owners (`model_name` and
//! `status_message` from core App state, `session_label` from the resolved
//! identity) but the TitleBar doesn't care where they come from.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
///
/// # Props
///
/// - `model_name`: The current model (e.g., "gemini-2.0-flash")
/// - `status_message`: Transient status (e.g., "12 ideas")
/// - `session_label`: Session id display text, `None` until sign-in resolves
pub struct TitleBar {
    pub model_name: String,
    pub status_message: String,
    pub session_label: Option<String>,
}

impl TitleBar {
    pub fn new(model_name: String, status_message: String, session_label: Option<String>) -> Self {
        Self {
            model_name,
            status_message,
            session_label,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line.
    ///
    /// Always shows the model name; the status and session segments are
    /// appended only when present.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut title_text = format!("Sprout (model: {})", self.model_name);
        if !self.status_message.is_empty() {
            title_text.push_str(&format!(" | {}", self.status_message));
        }
        if let Some(session) = &self.session_label {
            title_text.push_str(&format!(" | session {}", session));
        }

        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_new() {
        let title_bar = TitleBar::new("gemini-2.0-flash".to_string(), "".to_string(), None);
        assert_eq!(title_bar.model_name, "gemini-2.0-flash");
        assert!(title_bar.session_label.is_none());
    }

    #[test]
    fn test_title_bar_with_status_and_session() {
        let mut title_bar = TitleBar::new(
            "gemini-2.0-flash".to_string(),
            "12 ideas".to_string(),
            Some("abc123".to_string()),
        );

        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Sprout"));
        assert!(text.contains("gemini-2.0-flash"));
        assert!(text.contains("12 ideas"));
        assert!(text.contains("session abc123"));
    }

    #[test]
    fn test_title_bar_without_session() {
        let mut title_bar = TitleBar::new(
            "gemini-2.0-flash".to_string(),
            "Welcome to Sprout!".to_string(),
            None,
        );

        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Welcome to Sprout!"));
        assert!(!text.contains("session"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("gemini-2.0-flash".to_string(), "".to_string(), None);

        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Sprout (model: gemini-2.0-flash)"));
        assert!(!text.contains('|'));
    }
}
