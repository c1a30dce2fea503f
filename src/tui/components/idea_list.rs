//! # IdeaList Component
//!
//! Scrollable, selectable list of generated keyword ideas.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `IdeaListState` lives in `TuiState`
//! - `IdeaList` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

/// Persistent selection state for the idea list.
pub struct IdeaListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl IdeaListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    /// Move selection up, clamped at the top.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = self.selected.saturating_sub(1);
        self.list_state.select(Some(self.selected));
    }

    /// Move selection down, clamped at the bottom.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
        self.list_state.select(Some(self.selected));
    }

    /// The currently selected idea, if the list has one at that position.
    pub fn selected_idea<'a>(&self, ideas: &'a [String]) -> Option<&'a str> {
        ideas.get(self.selected).map(String::as_str)
    }
}

/// Transient render wrapper for the idea list.
pub struct IdeaList<'a> {
    state: &'a mut IdeaListState,
    ideas: &'a [String],
    browsing: bool,
}

impl<'a> IdeaList<'a> {
    pub fn new(state: &'a mut IdeaListState, ideas: &'a [String], browsing: bool) -> Self {
        Self {
            state,
            ideas,
            browsing,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let help_text = if self.browsing {
            " ↑/↓ Select  Enter Copy  Esc Back "
        } else if !self.ideas.is_empty() {
            " ↑/↓ Browse "
        } else {
            ""
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Ideas ")
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));
        if !help_text.is_empty() {
            block = block.title_bottom(Line::from(help_text).centered());
        }

        if self.ideas.is_empty() {
            let empty = Paragraph::new("Enter a seed keyword and press Enter to generate ideas.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // Keep selection valid if the list shrank since it was set
        self.state.selected = self.state.selected.min(self.ideas.len() - 1);
        // Highlight only while browsing
        self.state.list_state.select(if self.browsing {
            Some(self.state.selected)
        } else {
            None
        });

        let items: Vec<ListItem> = self
            .ideas
            .iter()
            .enumerate()
            .map(|(i, idea)| {
                let style = if self.browsing && i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::styled(format!("{:>2}. {}", i + 1, idea), style))
            })
            .collect();

        let list = List::new(items).block(block);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn ideas(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("idea {i}")).collect()
    }

    #[test]
    fn test_selection_clamps_at_boundaries() {
        let mut state = IdeaListState::new();
        let list = ideas(3);

        state.select_prev(list.len());
        assert_eq!(state.selected, 0);

        state.select_next(list.len());
        state.select_next(list.len());
        state.select_next(list.len());
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_selection_ignores_empty_list() {
        let mut state = IdeaListState::new();
        state.select_next(0);
        state.select_prev(0);
        assert_eq!(state.selected, 0);
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_selected_idea() {
        let mut state = IdeaListState::new();
        let list = ideas(3);
        state.select_next(list.len());
        assert_eq!(state.selected_idea(&list), Some("idea 2"));
        assert_eq!(state.selected_idea(&[]), None);
    }

    #[test]
    fn test_render_empty_state_shows_hint() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = IdeaListState::new();

        terminal
            .draw(|f| {
                IdeaList::new(&mut state, &[], false).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Enter a seed keyword"));
    }

    #[test]
    fn test_render_numbers_items() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = IdeaListState::new();
        let list = ideas(2);

        terminal
            .draw(|f| {
                IdeaList::new(&mut state, &list, false).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("1. idea 1"));
        assert!(text.contains("2. idea 2"));
    }

    #[test]
    fn test_render_clamps_stale_selection() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = IdeaListState::new();
        state.selected = 9;
        let list = ideas(2);

        terminal
            .draw(|f| {
                IdeaList::new(&mut state, &list, true).render(f, f.area());
            })
            .unwrap();

        assert_eq!(state.selected, 1);
        assert_eq!(state.list_state.selected(), Some(1));
    }
}
