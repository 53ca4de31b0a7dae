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

//! The calculator window frame.
//!
//! The calculator is drawn as a fixed size, borderless panel floating inside
//! the terminal. It cannot be resized, but it can be dragged around by
//! pressing the mouse anywhere on its background and moving it; the point
//! that was grabbed stays under the mouse while dragging.

use ratatui::layout::{Position, Rect};
use tracing::trace;

pub(crate) const PANEL_WIDTH: u16 = 30;
pub(crate) const PANEL_HEIGHT: u16 = 22;

pub(crate) struct WindowFrame {
    /// Area available to the panel, normally the whole terminal.
    bounds: Rect,
    origin: Position,
    /// Offset of the grab point from the panel origin while dragging.
    grab: Option<Position>,
}

impl WindowFrame {
    /// Creates a frame centred within `bounds`.
    pub(crate) fn new(bounds: Rect) -> Self {
        let origin = Position::new(
            bounds.x + bounds.width.saturating_sub(PANEL_WIDTH) / 2,
            bounds.y + bounds.height.saturating_sub(PANEL_HEIGHT) / 2,
        );

        Self {
            bounds,
            origin,
            grab: None,
        }
    }

    /// The panel area, trimmed if the terminal is smaller than the panel.
    pub(crate) fn area(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, PANEL_WIDTH, PANEL_HEIGHT).intersection(self.bounds)
    }

    pub(crate) fn contains(&self, column: u16, row: u16) -> bool {
        self.area().contains(Position::new(column, row))
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// Starts a drag if the press landed on the panel.
    pub(crate) fn begin_drag(&mut self, column: u16, row: u16) -> bool {
        if !self.contains(column, row) {
            return false;
        }

        self.grab = Some(Position::new(column - self.origin.x, row - self.origin.y));
        trace!(column, row, "window drag started");
        true
    }

    /// Moves the panel so the grab point follows the mouse.
    pub(crate) fn drag_to(&mut self, column: u16, row: u16) {
        if let Some(grab) = self.grab {
            let x = column.saturating_sub(grab.x);
            let y = row.saturating_sub(grab.y);
            self.move_to(x, y);
        }
    }

    pub(crate) fn end_drag(&mut self) {
        if self.grab.take().is_some() {
            trace!(x = self.origin.x, y = self.origin.y, "window drag finished");
        }
    }

    /// Updates the available area, pulling the panel back inside it.
    pub(crate) fn resize(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.move_to(self.origin.x, self.origin.y);
    }

    fn move_to(&mut self, x: u16, y: u16) {
        let max_x = self.bounds.x + self.bounds.width.saturating_sub(PANEL_WIDTH);
        let max_y = self.bounds.y + self.bounds.height.saturating_sub(PANEL_HEIGHT);

        self.origin = Position::new(x.clamp(self.bounds.x, max_x), y.clamp(self.bounds.y, max_y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> WindowFrame {
        WindowFrame::new(Rect::new(0, 0, 100, 40))
    }

    #[test]
    fn test_starts_centred() {
        let frame = frame();
        assert_eq!(frame.area(), Rect::new(35, 9, PANEL_WIDTH, PANEL_HEIGHT));
    }

    #[test]
    fn test_drag_keeps_grab_point_under_mouse() {
        let mut frame = frame();
        assert!(frame.begin_drag(40, 10));
        assert!(frame.is_dragging());

        frame.drag_to(50, 15);
        assert_eq!(frame.area().x, 45);
        assert_eq!(frame.area().y, 14);

        frame.end_drag();
        assert!(!frame.is_dragging());

        frame.drag_to(0, 0);
        assert_eq!(frame.area().x, 45);
    }

    #[test]
    fn test_press_outside_does_not_drag() {
        let mut frame = frame();
        assert!(!frame.begin_drag(0, 0));
        assert!(!frame.is_dragging());
    }

    #[test]
    fn test_drag_is_clamped_to_bounds() {
        let mut frame = frame();
        assert!(frame.begin_drag(35, 9));

        frame.drag_to(0, 0);
        assert_eq!((frame.area().x, frame.area().y), (0, 0));

        frame.drag_to(99, 39);
        assert_eq!((frame.area().x, frame.area().y), (100 - PANEL_WIDTH, 40 - PANEL_HEIGHT));
    }

    #[test]
    fn test_resize_pulls_panel_inside() {
        let mut frame = frame();
        assert!(frame.begin_drag(35, 9));
        frame.drag_to(99, 39);
        frame.end_drag();

        frame.resize(Rect::new(0, 0, 50, 30));
        assert_eq!(frame.area(), Rect::new(20, 8, PANEL_WIDTH, PANEL_HEIGHT));
    }

    #[test]
    fn test_small_terminal_trims_area() {
        let frame = WindowFrame::new(Rect::new(0, 0, 20, 10));
        assert_eq!(frame.area(), Rect::new(0, 0, 20, 10));
    }
}
