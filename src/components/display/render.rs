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

//! UI rendering logic for the display view.
//!
//! The history line sits above the primary value, both right aligned. An
//! error message replaces the primary value and is drawn in the error colour.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::{components::DisplayView, render::Render, theme::Theme};

impl Render for DisplayView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let history = Paragraph::new(self.readout.history.as_str())
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.history_fg));
        f.render_widget(history, chunks[0]);

        let primary_fg = if self.readout.is_error() {
            theme.error_fg
        } else {
            theme.display_fg
        };

        let primary = Paragraph::new(self.readout.primary.as_str())
            .alignment(Alignment::Right)
            .style(Style::default().fg(primary_fg).add_modifier(Modifier::BOLD));
        f.render_widget(primary, chunks[1]);
    }
}
