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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (mouse, keyboard), the calculator
//! engine, the audio player and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel.
//! 2. **Process**: The [`process_events`] function routes mouse input to the
//!    keypad and the window frame, feeds button presses to the calculator and
//!    hands published readouts to the display and the audio player.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, layout::Rect, prelude::CrosstermBackend};
use tracing::{debug, warn};

use crate::{
    App,
    engine::{CalculatorDelegate, Input, Readout},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),

    ButtonPressed(Input),
    DisplayChanged(Readout),

    ExitApplication,

    Error(String),
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Mouse(mouse) => process_mouse_event(app, mouse)?,
            AppEvent::Resize(width, height) => app.window.resize(Rect::new(0, 0, width, height)),

            AppEvent::ButtonPressed(input) => {
                app.calculator.dispatch(input);
            }

            AppEvent::DisplayChanged(readout) => {
                if let Err(e) = app.audio_player.cue_readout(&readout) {
                    warn!("failed to play audio cue: {e:#}");
                }
                app.display.set_readout(readout);
            }

            AppEvent::Error(message) => warn!("{message}"),

            AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Handles application control keys.
///
/// Calculator entry is mouse only, the keyboard just quits.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => app.event_tx.send(AppEvent::ExitApplication)?,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => app.event_tx.send(AppEvent::ExitApplication)?,
        _ => {}
    }

    Ok(())
}

/// Routes mouse input between the keypad and the window frame.
///
/// A press on a button belongs to the keypad, a press anywhere else on the
/// panel grabs the window for dragging.
fn process_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.keypad.button_at(mouse.column, mouse.row).is_some() {
                app.keypad.process_event(Event::Mouse(mouse), &app.event_tx)?;
            } else if app.window.begin_drag(mouse.column, mouse.row) {
                debug!("grabbed calculator window");
            }
        }

        MouseEventKind::Drag(MouseButton::Left) if app.window.is_dragging() => {
            app.window.drag_to(mouse.column, mouse.row)
        }

        MouseEventKind::Up(MouseButton::Left) => {
            app.keypad.process_event(Event::Mouse(mouse), &app.event_tx)?;
            app.window.end_drag();
        }

        _ => {}
    }

    Ok(())
}

impl CalculatorDelegate for Sender<AppEvent> {
    fn on_render(&self, readout: &Readout) {
        // The receiver only goes away when the application is shutting down
        let _ = self.send(AppEvent::DisplayChanged(readout.clone()));
    }
}
