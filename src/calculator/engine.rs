//! State transitions.
//!
//! Each function takes the current state and returns the next one. Nothing
//! here fails: arithmetic errors are committed as the `"Error"` display.

use super::error::{CalcError, ERROR_DISPLAY};
use super::format::format_number;
use super::operation::Operation;
use super::state::{CalculatorState, CompletedOperation, Pending};

/// Enter a single digit.
///
/// Starts a fresh numeral after an operator or result, replaces a lone `"0"`
/// or the error sentinel, and appends otherwise. Non-digits are ignored.
pub fn input_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    if !digit.is_ascii_digit() {
        tracing::trace!(%digit, "ignoring non-digit input");
        return state.clone();
    }

    let display = if state.waiting_for_new_value || state.display == "0" || state.is_error() {
        digit.to_string()
    } else {
        format!("{}{}", state.display, digit)
    };

    CalculatorState {
        display,
        waiting_for_new_value: false,
        ..state.clone()
    }
}

/// Enter a decimal point. A second point in the same numeral is a no-op.
pub fn input_decimal_point(state: &CalculatorState) -> CalculatorState {
    if state.waiting_for_new_value || state.is_error() {
        return CalculatorState {
            display: "0.".to_string(),
            waiting_for_new_value: false,
            ..state.clone()
        };
    }

    if state.display.contains('.') {
        return state.clone();
    }

    CalculatorState {
        display: format!("{}.", state.display),
        ..state.clone()
    }
}

/// Full reset to the initial state.
pub fn clear(_state: &CalculatorState) -> CalculatorState {
    CalculatorState::default()
}

/// Remove the last character of the display, never leaving it empty.
pub fn backspace(state: &CalculatorState) -> CalculatorState {
    if state.is_error() {
        return CalculatorState {
            display: "0".to_string(),
            ..state.clone()
        };
    }

    let mut display = state.display.clone();
    display.pop();
    if display.is_empty() || display == "-" {
        display = "0".to_string();
    }

    CalculatorState {
        display,
        ..state.clone()
    }
}

/// Press a binary operator.
///
/// Stages the displayed value when nothing is pending, substitutes the
/// operator when one was just pressed, and otherwise resolves the pending
/// operation first so that operations chain left to right.
pub fn apply_operation(state: &CalculatorState, op: Operation) -> CalculatorState {
    let Some(input_value) = state.input_value() else {
        return state.clone();
    };

    match state.pending() {
        Pending::None => CalculatorState {
            previous_value: Some(input_value),
            operation: Some(op),
            waiting_for_new_value: true,
            ..state.clone()
        },
        Pending::AwaitingOperand { .. } => CalculatorState {
            operation: Some(op),
            ..state.clone()
        },
        Pending::WithOperand { lhs, operation } => match operation.apply(lhs, input_value) {
            Ok(result) => CalculatorState {
                display: format_number(result),
                previous_value: Some(result),
                operation: Some(op),
                waiting_for_new_value: true,
                last: Some(CompletedOperation {
                    operation,
                    operand: input_value,
                }),
            },
            Err(err) => error_state(state, err),
        },
    }
}

/// Press `=`.
///
/// Resolves the pending operation, or repeats the last completed one
/// against the display when nothing is pending.
pub fn calculate(state: &CalculatorState) -> CalculatorState {
    let Some(input_value) = state.input_value() else {
        return state.clone();
    };

    match state.pending() {
        Pending::None => {
            let Some(last) = state.last else {
                return state.clone();
            };

            match last.operation.apply(input_value, last.operand) {
                Ok(result) => CalculatorState {
                    display: format_number(result),
                    waiting_for_new_value: true,
                    ..state.clone()
                },
                Err(err) => error_state(state, err),
            }
        }
        Pending::AwaitingOperand { lhs, operation } | Pending::WithOperand { lhs, operation } => {
            match operation.apply(lhs, input_value) {
                Ok(result) => CalculatorState {
                    display: format_number(result),
                    previous_value: None,
                    operation: None,
                    waiting_for_new_value: true,
                    last: Some(CompletedOperation {
                        operation,
                        operand: input_value,
                    }),
                },
                Err(err) => error_state(state, err),
            }
        }
    }
}

/// Commit a failed calculation. The last completed operation is kept.
fn error_state(state: &CalculatorState, err: CalcError) -> CalculatorState {
    tracing::debug!(error = %err, "calculation failed");

    CalculatorState {
        display: ERROR_DISPLAY.to_string(),
        previous_value: None,
        operation: None,
        waiting_for_new_value: true,
        last: state.last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(state: &CalculatorState, input: &str) -> CalculatorState {
        input.chars().fold(state.clone(), |state, c| {
            if c == '.' {
                input_decimal_point(&state)
            } else {
                input_digit(&state, c)
            }
        })
    }

    fn start(input: &str) -> CalculatorState {
        digits(&CalculatorState::default(), input)
    }

    fn compute(lhs: &str, op: Operation, rhs: &str) -> CalculatorState {
        let state = apply_operation(&start(lhs), op);
        calculate(&digits(&state, rhs))
    }

    /// Type `f64::MAX` as the next operand.
    fn near_max_entry(state: &CalculatorState) -> CalculatorState {
        CalculatorState {
            display: format_number(f64::MAX),
            waiting_for_new_value: false,
            ..state.clone()
        }
    }

    fn near_max() -> CalculatorState {
        CalculatorState {
            display: format_number(f64::MAX),
            ..CalculatorState::default()
        }
    }

    #[test]
    fn test_digit_entry() {
        let state = start("12");
        assert_eq!(state.display, "12");

        let state = start("007");
        assert_eq!(state.display, "7");
    }

    #[test]
    fn test_non_digit_ignored() {
        let state = start("4");
        assert_eq!(input_digit(&state, 'x'), state);
    }

    #[test]
    fn test_single_decimal_point() {
        let state = start("1.2.3..4");
        assert_eq!(state.display, "1.234");
        assert_eq!(state.display.matches('.').count(), 1);
    }

    #[test]
    fn test_decimal_after_operator() {
        let state = apply_operation(&start("5"), Operation::Add);
        let state = input_decimal_point(&state);
        assert_eq!(state.display, "0.");
        assert!(!state.waiting_for_new_value);
        assert_eq!(digits(&state, "5").display, "0.5");
    }

    #[test]
    fn test_decimal_on_zero() {
        let state = input_decimal_point(&CalculatorState::default());
        assert_eq!(state.display, "0.");
        assert_eq!(input_digit(&state, '0').display, "0.0");
    }

    #[test]
    fn test_chained_operations() {
        let state = apply_operation(&start("3"), Operation::Add);
        let state = apply_operation(&digits(&state, "4"), Operation::Multiply);
        assert_eq!(state.display, "7");
        assert_eq!(state.previous_value, Some(7.0));
        assert_eq!(state.operation, Some(Operation::Multiply));
        assert_eq!(state.last_operation(), Some(Operation::Add));
        assert_eq!(state.last_operand(), Some(4.0));

        let state = calculate(&digits(&state, "2"));
        assert_eq!(state.display, "14");
        assert_eq!(state.previous_value, None);
        assert_eq!(state.operation, None);
    }

    #[test]
    fn test_stage_leaves_display() {
        let state = apply_operation(&start("42"), Operation::Subtract);
        assert_eq!(state.display, "42");
        assert_eq!(state.previous_value, Some(42.0));
        assert!(state.waiting_for_new_value);
        assert_eq!(state.last, None);
    }

    #[test]
    fn test_operator_then_equals_reuses_display() {
        let state = apply_operation(&start("5"), Operation::Add);
        let state = calculate(&state);
        assert_eq!(state.display, "10");
        assert_eq!(state.last_operand(), Some(5.0));
    }

    #[test]
    fn test_division_by_zero() {
        let state = apply_operation(&start("5"), Operation::Divide);
        let state = calculate(&digits(&state, "0"));
        assert_eq!(state.display, "Error");
        assert_eq!(state.previous_value, None);
        assert_eq!(state.operation, None);
        assert_eq!(state.last, None);

        let state = input_digit(&state, '7');
        assert_eq!(state.display, "7");
    }

    #[test]
    fn test_division_by_zero_while_chaining() {
        let state = apply_operation(&start("8"), Operation::Divide);
        let state = apply_operation(&digits(&state, "0"), Operation::Add);
        assert_eq!(state.display, "Error");
        assert_eq!(state.previous_value, None);
        assert_eq!(state.operation, None);
        assert!(state.waiting_for_new_value);
    }

    #[test]
    fn test_error_keeps_last_operation() {
        let state = compute("2", Operation::Add, "3");
        let state = apply_operation(&digits(&state, "1"), Operation::Divide);
        let state = calculate(&digits(&state, "0"));
        assert_eq!(state.display, "Error");
        assert_eq!(state.last_operation(), Some(Operation::Add));
        assert_eq!(state.last_operand(), Some(3.0));
    }

    #[test]
    fn test_overflow_commits_error() {
        let state = apply_operation(&near_max(), Operation::Multiply);
        let state = calculate(&digits(&state, "10"));
        assert_eq!(state.display, "Error");
        assert_eq!(state.previous_value, None);
        assert_eq!(state.operation, None);
        assert!(state.waiting_for_new_value);
        assert_eq!(state.last, None);
    }

    #[test]
    fn test_overflow_while_chaining() {
        let state = apply_operation(&near_max(), Operation::Add);
        let state = apply_operation(&near_max_entry(&state), Operation::Subtract);
        assert_eq!(state.display, "Error");
        assert_eq!(state.previous_value, None);
        assert_eq!(state.operation, None);
    }

    #[test]
    fn test_overflow_on_repeat_keeps_last() {
        let state = compute("2", Operation::Multiply, "10");
        assert_eq!(state.display, "20");

        let state = CalculatorState {
            display: format_number(f64::MAX),
            ..state
        };
        let state = calculate(&state);
        assert_eq!(state.display, "Error");
        assert_eq!(state.last_operation(), Some(Operation::Multiply));
        assert_eq!(state.last_operand(), Some(10.0));
    }

    #[test]
    fn test_operators_ignored_on_error() {
        let state = compute("1", Operation::Divide, "0");
        assert_eq!(apply_operation(&state, Operation::Add), state);
        assert_eq!(calculate(&state), state);
    }

    #[test]
    fn test_repeat_operation() {
        let state = apply_operation(&start("5"), Operation::Add);
        let state = calculate(&digits(&state, "3"));
        assert_eq!(state.display, "8");

        let state = calculate(&state);
        assert_eq!(state.display, "11");

        let state = calculate(&state);
        assert_eq!(state.display, "14");
        assert_eq!(state.last_operand(), Some(3.0));
    }

    #[test]
    fn test_repeat_against_new_entry() {
        let state = apply_operation(&start("10"), Operation::Subtract);
        let state = calculate(&digits(&state, "4"));
        assert_eq!(state.display, "6");

        let state = calculate(&digits(&state, "20"));
        assert_eq!(state.display, "16");
    }

    #[test]
    fn test_repeat_division_by_zero() {
        let state = apply_operation(&start("0"), Operation::Divide);
        let state = calculate(&state);
        assert_eq!(state.display, "Error");

        // 6 ÷ 2 = 3, then repeat ÷2 keeps dividing.
        let state = compute("6", Operation::Divide, "2");
        assert_eq!(state.display, "3");
        assert_eq!(calculate(&state).display, "1.5");
    }

    #[test]
    fn test_equals_with_nothing_is_noop() {
        let state = CalculatorState::default();
        assert_eq!(calculate(&state), state);

        let state = start("9");
        assert_eq!(calculate(&state), state);
    }

    #[test]
    fn test_operator_substitution() {
        let state = apply_operation(&start("5"), Operation::Add);
        let state = apply_operation(&state, Operation::Multiply);
        assert_eq!(state.previous_value, Some(5.0));
        assert_eq!(state.operation, Some(Operation::Multiply));
        assert_eq!(state.last, None);

        let state = calculate(&digits(&state, "2"));
        assert_eq!(state.display, "10");
    }

    #[test]
    fn test_clear_resets_everything() {
        let state = apply_operation(&start("5"), Operation::Add);
        let state = calculate(&digits(&state, "3"));
        let state = apply_operation(&state, Operation::Divide);
        assert_eq!(clear(&state), CalculatorState::default());

        let errored = compute("1", Operation::Divide, "0");
        assert_eq!(clear(&errored), CalculatorState::default());
    }

    #[test]
    fn test_backspace() {
        assert_eq!(backspace(&start("123")).display, "12");
        assert_eq!(backspace(&start("7")).display, "0");
        assert_eq!(backspace(&CalculatorState::default()).display, "0");
        assert_eq!(backspace(&start("1.")).display, "1");

        let errored = compute("1", Operation::Divide, "0");
        assert_eq!(backspace(&errored).display, "0");
    }

    #[test]
    fn test_backspace_negative_result() {
        let state = compute("2", Operation::Subtract, "7");
        assert_eq!(state.display, "-5");
        assert_eq!(backspace(&state).display, "0");
    }

    #[test]
    fn test_floating_point_results() {
        let state = apply_operation(&start("1"), Operation::Divide);
        let state = calculate(&digits(&state, "4"));
        assert_eq!(state.display, "0.25");
    }
}
