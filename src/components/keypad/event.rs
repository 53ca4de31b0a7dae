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

//! Mouse handling for the keypad.
//!
//! A left press on a button highlights it and forwards its engine input to the
//! application, releasing the mouse clears the highlight.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, MouseButton, MouseEventKind};

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::keypad::{BUTTONS, Keypad},
};

impl AppEventProcessor for Keypad {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Mouse(mouse) = event else {
            return Ok(());
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.button_at(mouse.column, mouse.row) {
                    self.pressed = Some(index);
                    event_tx.send(AppEvent::ButtonPressed(BUTTONS[index].input))?;
                }
            }

            MouseEventKind::Up(MouseButton::Left) => self.pressed = None,

            _ => {}
        }

        Ok(())
    }
}
