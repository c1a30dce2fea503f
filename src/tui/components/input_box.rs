//! # InputBox Component
//!
//! Single-line editor for the seed keyword.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Scroll horizontally when the text outgrows the box
//!
//! ## State Management
//!
//! The buffer is internal state and survives submission, like a form field:
//! the submitted keyword stays put so it can be tweaked and resubmitted.
//! `title` and `dimmed` are props from the parent.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Left + right border consumed horizontally by the bordered block
const HORIZONTAL_OVERHEAD: u16 = 2;
/// Offset from area edge to content (border width)
const BORDER_OFFSET: u16 = 1;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User pressed Enter. Carries the raw buffer, untrimmed and possibly
    /// empty - validation is the reducer's job, not the widget's.
    Submit(String),
    /// Text content changed (optional, if parent needs to know)
    ContentChanged,
}

/// Single-line text input with horizontal scrolling.
///
/// # Props
///
/// - `title`: Block title, set by the parent each frame
/// - `dimmed`: Muted styling while focus is elsewhere
///
/// # State
///
/// - `buffer`: Current text being typed
/// - `cursor_pos`: Byte offset of the cursor within `buffer`
/// - `scroll`: Horizontal scroll offset in display columns
pub struct InputBox {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Block title (prop)
    pub title: String,
    /// Muted styling while the idea list is being browsed (prop)
    pub dimmed: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor_pos: usize,
    /// Horizontal scroll offset in display columns
    scroll: u16,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            title: String::new(),
            dimmed: false,
            cursor_pos: 0,
            scroll: 0,
        }
    }

    /// Display width of the buffer up to the cursor.
    fn cursor_col(&self) -> u16 {
        self.buffer[..self.cursor_pos].width() as u16
    }

    /// Adjust the scroll offset so the cursor stays inside the window.
    fn update_scroll(&mut self, inner_width: u16) {
        if inner_width == 0 {
            return;
        }
        let col = self.cursor_col();
        if col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll + inner_width {
            self.scroll = col - inner_width + 1;
        }
    }

    /// The slice of the buffer visible at the current scroll offset.
    ///
    /// Walks chars by display width so multi-column characters never get
    /// split across the window edge.
    fn visible_text(&self, inner_width: u16) -> String {
        if self.scroll == 0 && self.buffer.width() <= inner_width as usize {
            return self.buffer.clone();
        }
        let end = self.scroll + inner_width;
        let mut out = String::new();
        let mut col: u16 = 0;
        for c in self.buffer.chars() {
            let w = c.width().unwrap_or(0) as u16;
            if col >= self.scroll && col + w <= end {
                out.push(c);
            }
            col += w;
            if col >= end {
                break;
            }
        }
        out
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        self.update_scroll(inner_width);

        let style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(style)
            .title(self.title.clone());

        let input = Paragraph::new(self.visible_text(inner_width))
            .block(block)
            .style(style);

        frame.render_widget(input, area);

        // Terminal cursor only while the box has focus
        if !self.dimmed {
            let cursor_x = area.x + BORDER_OFFSET + self.cursor_col().saturating_sub(self.scroll);
            frame.set_cursor_position((cursor_x, area.y + BORDER_OFFSET));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor_pos, *c);
                self.cursor_pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: flatten pasted newlines to spaces
                let flat: String = text
                    .chars()
                    .filter(|c| *c != '\r')
                    .map(|c| if c == '\n' { ' ' } else { c })
                    .collect();
                self.buffer.insert_str(self.cursor_pos, &flat);
                self.cursor_pos += flat.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor_pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor_pos);
                    self.buffer.drain(prev..self.cursor_pos);
                    self.cursor_pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor_pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor_pos);
                    self.buffer.drain(self.cursor_pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor_pos > 0 {
                    self.cursor_pos = prev_char_boundary(&self.buffer, self.cursor_pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor_pos < self.buffer.len() {
                    self.cursor_pos = next_char_boundary(&self.buffer, self.cursor_pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor_pos != 0).then(|| {
                self.cursor_pos = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor_pos != self.buffer.len()).then(|| {
                self.cursor_pos = self.buffer.len();
                InputEvent::ContentChanged
            }),
            // The buffer is NOT cleared on submit: the reducer decides what
            // to do with the text, and the field keeps it either way.
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
