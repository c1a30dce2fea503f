use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{IdeaList, TitleBar};
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

/// Braille spinner shown in the input box title while a request is running.
const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Cap on the error banner so a long message can't crowd out the list.
const MAX_ERROR_HEIGHT: u16 = 5;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    // The error banner collapses to zero height when there is no error
    let error_height = app
        .error
        .as_deref()
        .map_or(0, |msg| error_banner_height(msg, frame.area().width));

    let layout = Layout::vertical([Length(1), Min(0), Length(error_height), Length(3)]);
    let [title_area, list_area, error_area, input_area] = layout.areas(frame.area());

    // Title bar
    let mut title_bar = TitleBar::new(
        app.model_name.clone(),
        app.status_message.clone(),
        app.identity.as_ref().map(|i| i.display()),
    );
    title_bar.render(frame, title_area);

    // Idea list
    let browsing = tui.input_mode == InputMode::Browse;
    IdeaList::new(&mut tui.idea_list, &app.ideas, browsing).render(frame, list_area);

    // Error banner
    if let Some(error_msg) = &app.error {
        draw_error_banner(frame, error_area, error_msg);
    }

    // Input box props, then render
    tui.input_box.title = if app.is_loading {
        format!(
            " {} Generating... ",
            SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()]
        )
    } else {
        String::from(" Seed keyword ")
    };
    tui.input_box.dimmed = browsing;
    tui.input_box.render(frame, input_area);
}

/// Height for the bordered error banner: wrapped content plus borders,
/// capped at `MAX_ERROR_HEIGHT`.
fn error_banner_height(message: &str, width: u16) -> u16 {
    let inner_width = width.saturating_sub(2);
    let paragraph = Paragraph::new(message).wrap(Wrap { trim: true });
    let lines = paragraph.line_count(inner_width) as u16;
    (lines + 2).min(MAX_ERROR_HEIGHT)
}

fn draw_error_banner(frame: &mut Frame, area: Rect, error_msg: &str) {
    let banner = Paragraph::new(error_msg)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::bordered()
                .title(" Error ")
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(banner, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                draw_ui(f, app, tui, 0);
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
    fn test_draw_ui_empty_app() {
        let app = test_app();
        let mut tui = TuiState::new();

        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Sprout (model: test-model)"));
        assert!(text.contains("Enter a seed keyword"));
        assert!(text.contains("Seed keyword"));
    }

    #[test]
    fn test_draw_ui_shows_ideas() {
        let mut app = test_app();
        app.ideas = vec!["best espresso beans".to_string(), "espresso vs drip".to_string()];
        let mut tui = TuiState::new();

        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("1. best espresso beans"));
        assert!(text.contains("2. espresso vs drip"));
    }

    #[test]
    fn test_draw_ui_shows_error_banner() {
        let mut app = test_app();
        app.error = Some("Please enter a seed keyword.".to_string());
        let mut tui = TuiState::new();

        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Error"));
        assert!(text.contains("Please enter a seed keyword."));
    }

    #[test]
    fn test_draw_ui_loading_shows_spinner() {
        let mut app = test_app();
        app.is_loading = true;
        let mut tui = TuiState::new();

        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Generating..."));
    }

    #[test]
    fn test_error_banner_height_single_line() {
        // 1 content line + 2 borders
        assert_eq!(error_banner_height("short", 80), 3);
    }

    #[test]
    fn test_error_banner_height_caps_long_messages() {
        let long = "x".repeat(2000);
        assert_eq!(error_banner_height(&long, 80), MAX_ERROR_HEIGHT);
    }
}
