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

//! Calculator error kinds.
//!
//! Every failure the engine can hit is represented here. None of them escape
//! the engine: a failed transition parks the calculator in its error state and
//! the matching message from [`ErrorMessages`] replaces the primary display.

use thiserror::Error;

use crate::config::ErrorMessages;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum CalcError {
    #[error("division by zero")]
    DivideByZero,

    #[error("result is not a finite number")]
    Overflow,

    #[error("malformed number: {0:?}")]
    ParseFailure(String),

    #[error("unable to format value: {0}")]
    FormatFailure(String),
}

impl CalcError {
    /// Picks the user facing message for this error.
    pub(crate) fn message<'a>(&self, messages: &'a ErrorMessages) -> &'a str {
        match self {
            CalcError::DivideByZero => &messages.divide_by_zero,
            CalcError::Overflow => &messages.overflow,
            CalcError::ParseFailure(_) | CalcError::FormatFailure(_) => &messages.generic,
        }
    }
}
