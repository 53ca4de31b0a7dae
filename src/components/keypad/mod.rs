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

//! Calculator keypad widget and state management.
//!
//! This module defines the button grid of the calculator. Every button knows
//! the engine [`Input`] it produces, so the rest of the application never has
//! to interpret button labels. The keypad remembers where it was last drawn
//! so that mouse clicks can be hit-tested against its buttons.

mod event;
mod render;

use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::engine::{Digit, Input, Operator};

const ROWS: usize = 5;
const COLUMNS: usize = 4;

pub(crate) const BUTTON_HEIGHT: u16 = 3;
pub(crate) const KEYPAD_HEIGHT: u16 = BUTTON_HEIGHT * ROWS as u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonKind {
    Digit,
    Operator,
    Function,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Button {
    pub(crate) label: &'static str,
    pub(crate) input: Input,
    pub(crate) kind: ButtonKind,
    row: usize,
    column: usize,
    span: usize,
}

const fn digit(label: &'static str, value: u8, row: usize, column: usize, span: usize) -> Button {
    let input = match Digit::new(value) {
        Some(d) => Input::Digit(d),
        None => panic!("digit out of range"),
    };

    Button { label, input, kind: ButtonKind::Digit, row, column, span }
}

const fn operator(label: &'static str, op: Operator, row: usize) -> Button {
    Button { label, input: Input::Operator(op), kind: ButtonKind::Operator, row, column: 3, span: 1 }
}

const fn function(label: &'static str, input: Input, column: usize) -> Button {
    Button { label, input, kind: ButtonKind::Function, row: 0, column, span: 1 }
}

pub(crate) const BUTTONS: [Button; 19] = [
    function("AC", Input::Clear, 0),
    function("±", Input::SignToggle, 1),
    function("%", Input::Percent, 2),
    operator("÷", Operator::Divide, 0),
    digit("7", 7, 1, 0, 1),
    digit("8", 8, 1, 1, 1),
    digit("9", 9, 1, 2, 1),
    operator("×", Operator::Multiply, 1),
    digit("4", 4, 2, 0, 1),
    digit("5", 5, 2, 1, 1),
    digit("6", 6, 2, 2, 1),
    operator("-", Operator::Subtract, 2),
    digit("1", 1, 3, 0, 1),
    digit("2", 2, 3, 1, 1),
    digit("3", 3, 3, 2, 1),
    operator("+", Operator::Add, 3),
    digit("0", 0, 4, 0, 2),
    Button { label: ".", input: Input::DecimalPoint, kind: ButtonKind::Digit, row: 4, column: 2, span: 1 },
    Button { label: "=", input: Input::Equals, kind: ButtonKind::Operator, row: 4, column: 3, span: 1 },
];

/// Splits the keypad area into one rectangle per entry of [`BUTTONS`].
pub(crate) fn button_areas(area: Rect) -> Vec<Rect> {
    let rows = Layout::vertical([Constraint::Length(BUTTON_HEIGHT); ROWS]).split(area);

    BUTTONS
        .iter()
        .map(|button| {
            let columns = Layout::horizontal([Constraint::Fill(1); COLUMNS])
                .spacing(1)
                .split(rows[button.row]);
            columns[button.column].union(columns[button.column + button.span - 1])
        })
        .collect()
}

pub(crate) struct Keypad {
    area: Rect,
    pressed: Option<usize>,
}

impl Keypad {
    pub(crate) fn new() -> Self {
        Self {
            area: Rect::default(),
            pressed: None,
        }
    }

    /// Index into [`BUTTONS`] of the button under the given terminal cell.
    pub(crate) fn button_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        button_areas(self.area)
            .iter()
            .position(|rect| rect.contains(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keypad() -> Keypad {
        let mut keypad = Keypad::new();
        keypad.area = Rect::new(10, 5, 28, KEYPAD_HEIGHT);
        keypad
    }

    fn label_at(keypad: &Keypad, column: u16, row: u16) -> Option<&'static str> {
        keypad.button_at(column, row).map(|index| BUTTONS[index].label)
    }

    #[test]
    fn test_every_cell_filled() {
        let mut cells = [[0; COLUMNS]; ROWS];
        for button in BUTTONS.iter() {
            for column in button.column..button.column + button.span {
                cells[button.row][column] += 1;
            }
        }
        assert!(cells.iter().flatten().all(|&count| count == 1));
    }

    #[test]
    fn test_button_inputs() {
        let input_of = |label: &str| BUTTONS.iter().find(|b| b.label == label).map(|b| b.input);
        assert_eq!(input_of("7"), Some(Input::Digit(Digit::new(7).unwrap())));
        assert_eq!(input_of("÷"), Some(Input::Operator(Operator::Divide)));
        assert_eq!(input_of("±"), Some(Input::SignToggle));
        assert_eq!(input_of("AC"), Some(Input::Clear));
        assert_eq!(input_of("="), Some(Input::Equals));
    }

    #[test]
    fn test_hit_corners() {
        let keypad = keypad();
        assert_eq!(label_at(&keypad, 10, 5), Some("AC"));
        assert_eq!(label_at(&keypad, 37, 7), Some("÷"));
        assert_eq!(label_at(&keypad, 10, 19), Some("0"));
        assert_eq!(label_at(&keypad, 37, 19), Some("="));
        assert_eq!(label_at(&keypad, 10, 8), Some("7"));
    }

    #[test]
    fn test_wide_zero_covers_gap() {
        let keypad = keypad();
        let areas = button_areas(keypad.area);
        let zero = areas[16];
        for column in zero.x..zero.right() {
            assert_eq!(label_at(&keypad, column, 18), Some("0"));
        }
        assert!(zero.width > areas[12].width);
    }

    #[test]
    fn test_miss_outside() {
        let keypad = keypad();
        assert_eq!(label_at(&keypad, 9, 5), None);
        assert_eq!(label_at(&keypad, 38, 5), None);
        assert_eq!(label_at(&keypad, 10, 20), None);
    }

    #[test]
    fn test_no_hits_before_first_draw() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_at(0, 0), None);
    }
}
