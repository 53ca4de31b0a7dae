// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Calculator TUI.
//!
//! A small desktop-style calculator that lives in the terminal.
//!
//! The calculator is drawn as a borderless panel that floats over the
//! terminal. Buttons are clicked with the mouse, and the panel can be dragged
//! around by its background.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash:
//!
//! * The **Main Thread** owns the calculator engine, manages the terminal
//!   lifecycle and renders the UI.
//! * An **Input Thread** forwards terminal events into the application event
//!   channel.
//! * An **Audio Worker** plays the display cues.
//!
//! Communication between the threads is handled via `std::sync::mpsc`
//! channels.

mod actions;
mod components;
mod config;
mod engine;
mod logging;
mod player;
mod render;
mod theme;
mod window;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};
use tracing::{info, warn};

use crate::{
    actions::events::{AppEvent, process_events},
    components::{DisplayView, Keypad},
    config::AppConfig,
    engine::Calculator,
    player::AudioPlayer,
    theme::Theme,
    window::WindowFrame,
};

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub calculator: Calculator<Sender<AppEvent>>,
    pub audio_player: AudioPlayer,

    pub display: DisplayView,
    pub keypad: Keypad,
    pub window: WindowFrame,
}

impl App {
    /// Create a new instance of application state.
    ///
    /// # Arguments
    ///
    /// * `config` - The loaded application configuration.
    /// * `bounds` - The terminal area the calculator window may occupy.
    pub fn new(config: AppConfig, bounds: Rect) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let calculator = Calculator::new(config.messages, event_tx.clone());
        let display = DisplayView::new(calculator.readout());

        Self {
            theme: Theme::from_config(&config.theme),
            audio_player: AudioPlayer::new(config.sounds, event_tx.clone()),
            event_tx,
            event_rx,
            calculator,
            display,
            keypad: Keypad::new(),
            window: WindowFrame::new(bounds),
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let log_path = logging::init(&config.log_level);
    if let Some(e) = config_error {
        warn!("Failed to load configuration, using defaults: {e}");
    }
    info!(log = ?log_path, "starting calculator");

    let (width, height) = terminal::size().context("Failed to query terminal size")?;
    let mut app = App::new(config, Rect::new(0, 0, width, height));

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    info!("calculator closed");
    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture so button clicks and drags are reported.
///
/// The terminal background colour is deliberately left alone, only the
/// calculator panel is painted.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, mouse capture and leaving the alternate screen. It also ensures
/// the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the input thread and enters the main event loop.
///
/// The input thread translates raw terminal events into application events.
/// After spawning it, control passes to [`process_events`] to manage the UI
/// and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(width, height)) => AppEvent::Resize(width, height),
                Ok(_) => continue,
                Err(e) => {
                    let _ = tx_input.send(AppEvent::Error(format!("Failed to read terminal input: {e}")));
                    let _ = tx_input.send(AppEvent::ExitApplication);
                    break;
                }
            };

            if tx_input.send(app_event).is_err() {
                break;
            }
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
