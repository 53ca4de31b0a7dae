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

//! UI rendering logic for the keypad.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Padding, Paragraph},
};

use crate::{
    components::keypad::{BUTTONS, ButtonKind, Keypad, button_areas},
    render::Render,
    theme::Theme,
};

impl Render for Keypad {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Remember where the buttons are for mouse hit-testing
        self.area = area;

        for (index, (button, button_area)) in BUTTONS.iter().zip(button_areas(area)).enumerate() {
            let background = if self.pressed == Some(index) {
                theme.pressed_bg
            } else {
                match button.kind {
                    ButtonKind::Digit => theme.digit_bg,
                    ButtonKind::Operator => theme.operator_bg,
                    ButtonKind::Function => theme.function_bg,
                }
            };

            let label = Paragraph::new(button.label)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(theme.button_fg)
                        .bg(background)
                        .add_modifier(Modifier::BOLD),
                )
                .block(Block::default().padding(Padding::top(button_area.height / 2)));

            f.render_widget(label, button_area);
        }
    }
}
