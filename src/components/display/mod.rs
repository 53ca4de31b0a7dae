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

//! Calculator display view.
//!
//! Holds the most recent [`Readout`] published by the engine. The view only
//! ever receives readouts, it never queries or mutates the calculator.

mod render;

use crate::engine::Readout;

pub(crate) struct DisplayView {
    readout: Readout,
}

impl DisplayView {
    pub(crate) fn new(readout: Readout) -> Self {
        Self { readout }
    }

    pub(crate) fn set_readout(&mut self, readout: Readout) {
        self.readout = readout;
    }
}
