//! Discrete input events and their mapping onto engine operations.

use crate::calculator::{CalculatorState, Operation, engine};

/// One keypad action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcEvent {
    /// A digit `0`-`9`.
    Digit(char),
    Decimal,
    Operator(Operation),
    Equals,
    Clear,
    Backspace,
}

impl CalcEvent {
    /// Compute the state that follows `state` after this event.
    pub fn apply(self, state: &CalculatorState) -> CalculatorState {
        match self {
            Self::Digit(digit) => engine::input_digit(state, digit),
            Self::Decimal => engine::input_decimal_point(state),
            Self::Operator(op) => engine::apply_operation(state, op),
            Self::Equals => engine::calculate(state),
            Self::Clear => engine::clear(state),
            Self::Backspace => engine::backspace(state),
        }
    }

    /// Short label for logs and the keypad.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(digit) => digit.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_drive_engine() {
        let events = [
            CalcEvent::Digit('1'),
            CalcEvent::Decimal,
            CalcEvent::Digit('5'),
            CalcEvent::Operator(Operation::Multiply),
            CalcEvent::Digit('4'),
            CalcEvent::Equals,
        ];
        let state = events
            .iter()
            .fold(CalculatorState::default(), |state, event| event.apply(&state));
        assert_eq!(state.display, "6");
    }

    #[test]
    fn test_clear_and_backspace() {
        let state = CalcEvent::Digit('9').apply(&CalculatorState::default());
        assert_eq!(CalcEvent::Backspace.apply(&state).display, "0");
        assert_eq!(CalcEvent::Clear.apply(&state), CalculatorState::default());
    }

    #[test]
    fn test_labels() {
        assert_eq!(CalcEvent::Operator(Operation::Divide).label(), "÷");
        assert_eq!(CalcEvent::Digit('3').label(), "3");
        assert_eq!(CalcEvent::Equals.label(), "=");
    }
}
