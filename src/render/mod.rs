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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Clear, Padding},
};

use crate::{App, components::KEYPAD_HEIGHT, theme::Theme};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the calculator panel to the terminal frame.
///
/// Only the panel is drawn. The rest of the terminal keeps its own
/// background, the panel floats over it at the position held by the window
/// frame.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the
///   keypad to record where its buttons were drawn.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = app.window.area().intersection(f.area());

    let panel = Block::default().style(Style::default().bg(app.theme.background_colour));

    f.render_widget(Clear, area);
    f.render_widget(panel, area);

    let (display_area, keypad_area) = panel_layout(area);
    app.display.draw(f, display_area, &app.theme);
    app.keypad.draw(f, keypad_area, &app.theme);
}

/// Splits the calculator panel into its display and keypad areas.
pub(crate) fn panel_layout(area: Rect) -> (Rect, Rect) {
    let inner = Block::default().padding(Padding::uniform(1)).inner(area);

    // Spare space, display, gap, keypad
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(KEYPAD_HEIGHT),
        ])
        .split(inner);

    (chunks[1], chunks[3])
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::{
        components::{DisplayView, Keypad},
        engine::{Readout, format::display_text},
        window::{PANEL_HEIGHT, PANEL_WIDTH, WindowFrame},
    };

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn render(readout: Readout) -> (Buffer, Keypad) {
        let mut terminal = Terminal::new(TestBackend::new(PANEL_WIDTH, PANEL_HEIGHT)).unwrap();
        let window = WindowFrame::new(Rect::new(0, 0, PANEL_WIDTH, PANEL_HEIGHT));
        let mut display = DisplayView::new(readout);
        let mut keypad = Keypad::new();
        let theme = Theme::default();

        terminal
            .draw(|f| {
                let (display_area, keypad_area) = panel_layout(window.area());
                display.draw(f, display_area, &theme);
                keypad.draw(f, keypad_area, &theme);
            })
            .unwrap();

        (terminal.backend().buffer().clone(), keypad)
    }

    #[test]
    fn test_display_lines() {
        let readout = Readout {
            primary: display_text("1234"),
            history: "12 +".to_string(),
            value: Some(1234.0),
        };
        let (buffer, _) = render(readout);

        let rows: Vec<String> = (0..PANEL_HEIGHT).map(|y| row_text(&buffer, y)).collect();
        let history = rows.iter().position(|r| r.trim_end().ends_with("12 +")).unwrap();
        assert!(rows[history + 1].trim_end().ends_with("1234"));
    }

    #[test]
    fn test_keypad_hit_matches_drawing() {
        let readout = Readout {
            primary: "0".to_string(),
            history: String::new(),
            value: Some(0.0),
        };
        let (buffer, keypad) = render(readout);

        let (x, y) = (0..PANEL_HEIGHT)
            .flat_map(|y| (0..PANEL_WIDTH).map(move |x| (x, y)))
            .find(|&(x, y)| buffer[(x, y)].symbol() == "=")
            .unwrap();
        assert_eq!(keypad.button_at(x, y), Some(18));
    }
}
