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

//! The calculator engine.
//!
//! A small state machine that turns button presses into a display readout. It
//! knows nothing about terminals, mice or audio: the view layer builds an
//! [`Input`] for each button press, hands it to [`Calculator::dispatch`], and
//! gets told about the new [`Readout`] through a [`CalculatorDelegate`].
//!
//! # States
//!
//! The engine is either *normal*, possibly with a pending operator, or in
//! *error* after a failed calculation. While in error every input is ignored
//! except clear and digit presses, both of which reset the calculator.

pub(crate) mod error;
pub(crate) mod format;

use tracing::{debug, info};

use crate::{
    config::ErrorMessages,
    engine::{
        error::CalcError,
        format::{display_text, format_decimal, parse_number},
    },
};

/// Longest operand that can be typed in.
pub(crate) const MAX_INPUT_LEN: usize = 12;

/// Divisors smaller than this in magnitude count as zero.
const ZERO_DIVISOR_EPSILON: f64 = 1e-12;

/// A single decimal digit, `0` to `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Digit(u8);

impl Digit {
    pub(crate) const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Self(value)) } else { None }
    }

    fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let result = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs.abs() < ZERO_DIVISOR_EPSILON {
                    return Err(CalcError::DivideByZero);
                }
                lhs / rhs
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

/// A button press, as seen by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Input {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    SignToggle,
    Percent,
}

/// What the display should show.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Readout {
    /// Formatted current operand, or the error message.
    pub(crate) primary: String,
    /// Formatted previous operand and pending operator, or empty.
    pub(crate) history: String,
    /// Numeric value of the current operand, `None` while in error.
    pub(crate) value: Option<f64>,
}

impl Readout {
    pub(crate) fn is_error(&self) -> bool {
        self.value.is_none()
    }
}

/// The complete calculator state.
///
/// Transitions consume the state and return the next one, so a state value is
/// never observed half way through an update.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CalculatorState {
    current_input: String,
    previous_value: String,
    operator: Option<Operator>,
    start_new_input: bool,
    error: Option<CalcError>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_input: "0".to_string(),
            previous_value: String::new(),
            operator: None,
            start_new_input: true,
            error: None,
        }
    }
}

impl CalculatorState {
    pub(crate) fn apply(self, input: Input) -> Self {
        match input {
            Input::Digit(digit) => self.on_digit(digit.as_char()),
            Input::DecimalPoint => self.on_digit('.'),
            Input::Operator(op) => self.on_operator(op),
            Input::Equals => self.on_equals(),
            Input::Clear => self.on_clear(),
            Input::SignToggle => self.on_sign_toggle(),
            Input::Percent => self.on_percent(),
        }
    }

    pub(crate) fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// Renders the state into display text.
    pub(crate) fn render(&self, messages: &ErrorMessages) -> Readout {
        if let Some(error) = &self.error {
            return Readout {
                primary: error.message(messages).to_string(),
                history: String::new(),
                value: None,
            };
        }

        let history = match self.operator {
            Some(op) if !self.previous_value.is_empty() => {
                format!("{} {}", display_text(&self.previous_value), op.symbol())
            }
            _ => String::new(),
        };

        Readout {
            primary: display_text(&self.current_input),
            history,
            value: parse_number(&self.current_input).ok(),
        }
    }

    // `key` is a digit character or `.`.
    fn on_digit(mut self, key: char) -> Self {
        if self.error.is_some() {
            self = Self::default();
        }

        if self.start_new_input {
            self.current_input = if key == '.' { "0.".to_string() } else { key.to_string() };
            self.start_new_input = false;
        } else if key == '.' {
            if !self.current_input.contains('.') {
                self.current_input.push('.');
            }
        } else if self.current_input == "0" {
            self.current_input = key.to_string();
        } else if self.current_input.chars().count() < MAX_INPUT_LEN {
            self.current_input.push(key);
        }

        self
    }

    fn on_operator(mut self, op: Operator) -> Self {
        if self.error.is_some() {
            return self;
        }

        if let Some(pending) = self.operator
            && !self.previous_value.is_empty()
            && !self.start_new_input
        {
            match self.calculate(pending) {
                Ok(result) => self.current_input = result,
                Err(e) => return self.fail(e),
            }
        }

        self.previous_value = self.current_input.clone();
        self.operator = Some(op);
        self.start_new_input = true;
        self
    }

    fn on_equals(mut self) -> Self {
        if self.error.is_some() || self.previous_value.is_empty() {
            return self;
        }
        let Some(pending) = self.operator else {
            return self;
        };

        match self.calculate(pending) {
            Ok(result) => {
                self.current_input = result;
                self.previous_value.clear();
                self.operator = None;
                self.start_new_input = true;
                self
            }
            Err(e) => self.fail(e),
        }
    }

    fn on_clear(self) -> Self {
        Self::default()
    }

    fn on_sign_toggle(mut self) -> Self {
        if self.error.is_some() {
            return self;
        }

        if let Some(positive) = self.current_input.strip_prefix('-') {
            self.current_input = positive.to_string();
        } else if self.current_input != "0" {
            self.current_input.insert(0, '-');
        }

        self
    }

    fn on_percent(mut self) -> Self {
        if self.error.is_some() {
            return self;
        }

        let percent = parse_number(&self.current_input).and_then(|value| format_decimal(value / 100.0));

        match percent {
            Ok(result) => {
                self.current_input = result;
                self
            }
            Err(e) => self.fail(e),
        }
    }

    // Operands are left as they were, only the error is recorded.
    fn fail(mut self, error: CalcError) -> Self {
        self.error = Some(error);
        self
    }

    fn calculate(&self, op: Operator) -> Result<String, CalcError> {
        let lhs = parse_number(&self.previous_value)?;
        let rhs = parse_number(&self.current_input)?;
        format_decimal(op.apply(lhs, rhs)?)
    }
}

/// Receives a fresh [`Readout`] each time the calculator state changes.
pub(crate) trait CalculatorDelegate {
    fn on_render(&self, readout: &Readout);
}

/// Owns a [`CalculatorState`] and reports every change to its delegate.
pub(crate) struct Calculator<D: CalculatorDelegate> {
    state: CalculatorState,
    messages: ErrorMessages,
    delegate: D,
}

impl<D: CalculatorDelegate> Calculator<D> {
    pub(crate) fn new(messages: ErrorMessages, delegate: D) -> Self {
        Self {
            state: CalculatorState::default(),
            messages,
            delegate,
        }
    }

    pub(crate) fn readout(&self) -> Readout {
        self.state.render(&self.messages)
    }

    /// Applies one input, notifying the delegate if anything changed.
    pub(crate) fn dispatch(&mut self, input: Input) -> Readout {
        let next = self.state.clone().apply(input);
        let changed = next != self.state;

        if let Some(error) = next.error()
            && self.state.error().is_none()
        {
            info!("calculator entered error state: {error}");
        }

        self.state = next;
        let readout = self.readout();
        debug!(?input, changed, primary = %readout.primary, history = %readout.history, "dispatched input");

        if changed {
            self.delegate.on_render(&readout);
        }

        readout
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Readout>>);

    impl CalculatorDelegate for Recorder {
        fn on_render(&self, readout: &Readout) {
            self.0.borrow_mut().push(readout.clone());
        }
    }

    fn digit(n: u8) -> Input {
        Input::Digit(Digit::new(n).unwrap())
    }

    fn keys(text: &str) -> Vec<Input> {
        text.chars()
            .map(|c| match c {
                '0'..='9' => digit(c as u8 - b'0'),
                '.' => Input::DecimalPoint,
                '+' => Input::Operator(Operator::Add),
                '-' => Input::Operator(Operator::Subtract),
                '*' => Input::Operator(Operator::Multiply),
                '/' => Input::Operator(Operator::Divide),
                '=' => Input::Equals,
                'C' => Input::Clear,
                '~' => Input::SignToggle,
                '%' => Input::Percent,
                other => panic!("no key for {other:?}"),
            })
            .collect()
    }

    fn run(text: &str) -> CalculatorState {
        keys(text)
            .into_iter()
            .fold(CalculatorState::default(), CalculatorState::apply)
    }

    fn show(text: &str) -> Readout {
        run(text).render(&ErrorMessages::default())
    }

    #[test]
    fn test_digit_bounds() {
        assert!(Digit::new(9).is_some());
        assert!(Digit::new(10).is_none());
    }

    #[test]
    fn test_digits_concatenate() {
        assert_eq!(run("123").current_input, "123");
        assert_eq!(run("1.25").current_input, "1.25");
        assert_eq!(run("000").current_input, "0");
        assert_eq!(run("007").current_input, "7");
        assert_eq!(run("123456789012").current_input, "123456789012");
    }

    #[test]
    fn test_leading_point_becomes_zero_point() {
        assert_eq!(run(".5").current_input, "0.5");
        assert_eq!(run("5+.").current_input, "0.");
    }

    #[test]
    fn test_repeated_point_ignored() {
        assert_eq!(run("1.2.3").current_input, "1.23");
        assert_eq!(run("1..").current_input, "1.");
    }

    #[test]
    fn test_input_length_capped() {
        assert_eq!(run("1234567890123456").current_input, "123456789012");
        assert_eq!(run("12345678901.23").current_input, "12345678901.");
    }

    #[test]
    fn test_addition() {
        let readout = show("5+3=");
        assert_eq!(readout.primary, "8");
        assert_eq!(readout.history, "");
    }

    #[test]
    fn test_history_shows_pending_operator() {
        assert_eq!(show("12+").history, "12 +");
        assert_eq!(show("12*3").history, "12 ×");
        assert_eq!(show("12/").history, "12 ÷");
        assert_eq!(show("12-").history, "12 -");
    }

    #[test]
    fn test_decimal_noise_trimmed() {
        assert_eq!(show(".1+.2=").primary, "0.3");
    }

    #[test]
    fn test_operator_chaining() {
        let state = run("2+3*");
        assert_eq!(state.current_input, "5");
        assert_eq!(state.previous_value, "5");
        assert_eq!(state.operator, Some(Operator::Multiply));
        assert_eq!(show("2+3*4=").primary, "20");
    }

    #[test]
    fn test_operator_replaced_without_new_operand() {
        let state = run("2+*");
        assert_eq!(state.previous_value, "2");
        assert_eq!(state.operator, Some(Operator::Multiply));
        assert_eq!(show("2+*3=").primary, "6");
    }

    #[test]
    fn test_result_is_replaced_by_next_digit() {
        assert_eq!(run("5+3=7").current_input, "7");
    }

    #[test]
    fn test_divide_by_zero() {
        let state = run("10/0=");
        assert_eq!(state.error(), Some(&CalcError::DivideByZero));
        assert_eq!(state.current_input, "0");
        assert_eq!(state.previous_value, "10");

        let readout = state.render(&ErrorMessages::default());
        assert_eq!(readout.primary, ErrorMessages::default().divide_by_zero);
        assert_eq!(readout.history, "");
        assert!(readout.is_error());
    }

    #[test]
    fn test_tiny_divisor_counts_as_zero() {
        let state = CalculatorState {
            current_input: "0.0000000000001".to_string(),
            previous_value: "1".to_string(),
            operator: Some(Operator::Divide),
            start_new_input: false,
            error: None,
        };
        assert_eq!(state.apply(Input::Equals).error(), Some(&CalcError::DivideByZero));
    }

    #[test]
    fn test_overflow() {
        let state = CalculatorState {
            current_input: "1e308".to_string(),
            previous_value: "1e308".to_string(),
            operator: Some(Operator::Multiply),
            start_new_input: false,
            error: None,
        };
        let state = state.apply(Input::Equals);
        assert_eq!(state.error(), Some(&CalcError::Overflow));
        assert_eq!(state.render(&ErrorMessages::default()).primary, ErrorMessages::default().overflow);
    }

    #[test]
    fn test_failed_chain_drops_new_operator() {
        let state = run("8/0+");
        assert!(state.error().is_some());
        assert_eq!(state.operator, Some(Operator::Divide));
        assert_eq!(state.previous_value, "8");
    }

    #[test]
    fn test_error_ignores_operations() {
        let failed = run("8/0=");
        for input in [
            Input::Operator(Operator::Add),
            Input::Equals,
            Input::SignToggle,
            Input::Percent,
        ] {
            assert_eq!(failed.clone().apply(input), failed);
        }
    }

    #[test]
    fn test_digit_resets_error() {
        let state = run("8/0=4");
        assert!(state.error().is_none());
        assert_eq!(state.current_input, "4");
        assert_eq!(state.previous_value, "");
        assert_eq!(state.operator, None);
    }

    #[test]
    fn test_point_resets_error() {
        assert_eq!(run("8/0=.").current_input, "0.");
    }

    #[test]
    fn test_clear_restores_default() {
        assert_eq!(run("12+3C"), CalculatorState::default());
        assert_eq!(run("8/0=C"), CalculatorState::default());
        assert_eq!(run("C"), CalculatorState::default());
    }

    #[test]
    fn test_equals_twice_is_noop() {
        let once = run("6*7=");
        assert_eq!(once.current_input, "42");
        assert_eq!(once.clone().apply(Input::Equals), once);
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        assert_eq!(run("42="), run("42"));
    }

    #[test]
    fn test_sign_toggle() {
        assert_eq!(run("5~").current_input, "-5");
        assert_eq!(run("5~~").current_input, "5");
        assert_eq!(run("~").current_input, "0");
        assert_eq!(show("9-12=").primary, "-3");
        assert_eq!(run("9-12=~").current_input, "3");
    }

    #[test]
    fn test_percent() {
        assert_eq!(run("50%").current_input, "0.5");
        assert_eq!(show("50%").primary, "0.5");
        assert_eq!(run("%").current_input, "0");
    }

    #[test]
    fn test_percent_keeps_editing() {
        assert_eq!(run("50%1").current_input, "0.51");
    }

    #[test]
    fn test_large_result_uses_scientific_notation() {
        let readout = show("999999*999999=");
        assert_eq!(readout.primary, "999998000001");

        let readout = show("1000000*1000000=");
        assert_eq!(readout.primary, "1.000000e+12");
    }

    #[test]
    fn test_readout_value() {
        assert_eq!(show("1.5").value, Some(1.5));
        assert_eq!(show("67").value, Some(67.0));
        assert_eq!(show("1/0=").value, None);
    }

    #[test]
    fn test_calculator_notifies_on_change() {
        let mut calculator = Calculator::new(ErrorMessages::default(), Recorder::default());

        calculator.dispatch(digit(5));
        calculator.dispatch(Input::Operator(Operator::Add));
        calculator.dispatch(digit(3));
        let readout = calculator.dispatch(Input::Equals);

        assert_eq!(readout.primary, "8");
        let rendered = calculator.delegate.0.borrow();
        assert_eq!(rendered.len(), 4);
        assert_eq!(rendered[1].history, "5 +");
        assert_eq!(rendered[3], readout);
    }

    #[test]
    fn test_calculator_skips_unchanged() {
        let mut calculator = Calculator::new(ErrorMessages::default(), Recorder::default());

        calculator.dispatch(Input::Clear);
        calculator.dispatch(Input::SignToggle);
        calculator.dispatch(Input::Equals);

        assert!(calculator.delegate.0.borrow().is_empty());
        assert_eq!(&calculator.state, &CalculatorState::default());
        assert_eq!(calculator.readout().primary, "0");
    }
}
