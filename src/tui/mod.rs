//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web, etc.)
//! in the future if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (request in flight): draws every ~80ms for a smooth
//!   spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal
//!   resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

pub mod clipboard;
mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::session::{self, IdentityToolkitBroker, SessionBroker, UuidFactory};
use crate::suggest::{GeminiProvider, SuggestionProvider, SuggestionRequest, parse_idea_list};
use crate::tui::clipboard::{ClipboardWriter, Osc52Clipboard};
use crate::tui::component::EventHandler;
use crate::tui::components::{IdeaListState, InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Text editing in the input box. Esc or Up/Down switches to Browse
    /// once ideas exist.
    Input,
    /// Navigate the idea list with arrow keys; Enter copies the selected
    /// idea. Typing auto-switches back to Input.
    Browse,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub input_box: InputBox,
    pub idea_list: IdeaListState,
    // Modal input mode
    pub input_mode: InputMode,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            idea_list: IdeaListState::new(),
            input_mode: InputMode::Input, // User expects to type immediately
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock  // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Build the suggestion provider from resolved credentials.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn SuggestionProvider> {
    let api_key = config
        .gemini_api_key
        .clone()
        .expect("Gemini API key must be set (config file or GEMINI_API_KEY env var)");
    Arc::new(GeminiProvider::new(
        api_key,
        Some(config.gemini_base_url.clone()),
    ))
}

/// Build the session broker, or `None` when no session key is configured
/// (the app then runs with a locally minted identity).
pub fn build_session_broker(config: &ResolvedConfig) -> Option<Arc<dyn SessionBroker>> {
    let api_key = config.session_api_key.clone()?;
    Some(Arc::new(IdentityToolkitBroker::new(
        api_key,
        Some(config.session_base_url.clone()),
    )))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = build_provider(&config);
    let mut app = App::new(provider, config.model_name.clone());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Resolve the session identity in the background; the UI never waits on it
    spawn_bootstrap(&config, tx.clone());

    let mut clipboard = Osc52Clipboard;

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Spinner animation only runs while a request is in flight
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                let effect = update(&mut app, Action::Quit);
                if effect == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Modal event dispatch
            match tui.input_mode {
                InputMode::Input => {
                    // Esc or Up/Down moves focus to the idea list (if there is one)
                    if matches!(
                        event,
                        TuiEvent::Escape | TuiEvent::CursorUp | TuiEvent::CursorDown
                    ) {
                        if !app.ideas.is_empty() {
                            tui.input_mode = InputMode::Browse;
                            // Enter the list at the bottom, nearest the input box
                            tui.idea_list.selected = app.ideas.len() - 1;
                        }
                        continue;
                    }

                    // InputBox handles everything else
                    if let Some(input_event) = tui.input_box.handle_event(&event) {
                        match input_event {
                            InputEvent::Submit(text) => {
                                // Disabled while a request is in flight
                                if !app.is_loading {
                                    let effect = update(&mut app, Action::Submit(text));
                                    if effect == Effect::SpawnGeneration {
                                        spawn_generation(&app, tx.clone());
                                    }
                                }
                            }
                            InputEvent::ContentChanged => {}
                        }
                    }
                }
                InputMode::Browse => {
                    match event {
                        TuiEvent::Escape => {
                            tui.input_mode = InputMode::Input;
                        }
                        TuiEvent::CursorUp => {
                            tui.idea_list.select_prev(app.ideas.len());
                        }
                        TuiEvent::CursorDown => {
                            tui.idea_list.select_next(app.ideas.len());
                        }
                        // Enter copies the selected idea
                        TuiEvent::Submit => {
                            if let Some(idea) =
                                tui.idea_list.selected_idea(&app.ideas).map(str::to_string)
                            {
                                let effect = update(&mut app, Action::CopyIdea(idea));
                                if let Effect::CopyToClipboard(text) = effect {
                                    clipboard.write(&text);
                                }
                            }
                        }
                        // Typing auto-switches to Input mode and forwards the event
                        TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                            tui.input_mode = InputMode::Input;
                            tui.input_box.handle_event(&event);
                        }
                        _ => {}
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (generation results, identity)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            // Fresh results invalidate the previous list selection
            if matches!(action, Action::IdeasReceived(_)) {
                tui.idea_list = IdeaListState::new();
            }
            let effect = update(&mut app, action);
            match effect {
                Effect::Quit => break,
                Effect::SpawnGeneration => spawn_generation(&app, tx.clone()),
                Effect::CopyToClipboard(text) => clipboard.write(&text),
                Effect::None => {}
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Spawn a background task that runs one generation request and reports
/// back through the action channel.
fn spawn_generation(app: &App, tx: mpsc::Sender<Action>) {
    info!("Spawning generation request for \"{}\"", app.seed);

    // Clone what we need for the async task
    let provider = app.provider.clone();
    let seed = app.seed.clone();
    let model = app.model_name.clone();

    tokio::spawn(async move {
        let request = SuggestionRequest {
            seed: &seed,
            model: &model,
        };
        let action = match provider.generate(request).await {
            Ok(text) => Action::IdeasReceived(parse_idea_list(&text)),
            Err(e) => {
                info!("Generation failed: {}", e);
                Action::GenerationFailed(e.user_message())
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send generation result: receiver dropped");
        }
    });
}

/// Spawn the one-shot identity bootstrap task.
fn spawn_bootstrap(config: &ResolvedConfig, tx: mpsc::Sender<Action>) {
    let broker = build_session_broker(config);
    let token = config.session_auth_token.clone();

    tokio::spawn(async move {
        let ids = UuidFactory;
        let (identity, notice) =
            session::establish_identity(broker.as_deref(), &ids, token.as_deref()).await;
        info!("Session identity resolved: {}", identity.display());
        if tx.send(Action::IdentityResolved { identity, notice }).is_err() {
            warn!("Failed to send identity: receiver dropped");
        }
    });
}
