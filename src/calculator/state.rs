//! The calculator's state record.
//!
//! A `CalculatorState` is a plain value. The engine never mutates one in
//! place; every transition builds the next state from the previous one.

use super::error::ERROR_DISPLAY;
use super::operation::Operation;

/// The most recently completed operation and its right-hand operand,
/// kept around so that `=` can repeat it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompletedOperation {
    pub operation: Operation,
    pub operand: f64,
}

/// Where the state stands with respect to a pending binary operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pending {
    /// No operand is staged.
    None,
    /// An operator was just pressed and no new operand has been typed.
    AwaitingOperand { lhs: f64, operation: Operation },
    /// An operator is pending and a new operand is on the display.
    WithOperand { lhs: f64, operation: Operation },
}

/// Everything the calculator remembers between key presses.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    /// The numeral being shown, `"0"`, or the `"Error"` sentinel.
    pub display: String,
    /// The staged left-hand operand.
    pub previous_value: Option<f64>,
    /// The pending operation.
    pub operation: Option<Operation>,
    /// Set right after an operator or result commits; the next digit
    /// starts a fresh numeral.
    pub waiting_for_new_value: bool,
    /// Retained after a result commits, for repeat on `=`.
    pub last: Option<CompletedOperation>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_new_value: false,
            last: None,
        }
    }
}

impl CalculatorState {
    /// Whether the display holds the error sentinel.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// The display parsed as a number, or `None` for the error sentinel.
    pub fn input_value(&self) -> Option<f64> {
        if self.is_error() {
            return None;
        }
        self.display.parse::<f64>().ok()
    }

    /// The operation `=` would repeat, if any.
    pub fn last_operation(&self) -> Option<Operation> {
        self.last.map(|last| last.operation)
    }

    /// The right-hand operand `=` would repeat, if any.
    pub fn last_operand(&self) -> Option<f64> {
        self.last.map(|last| last.operand)
    }

    /// Classify the pending-operation situation.
    pub fn pending(&self) -> Pending {
        match (self.previous_value, self.operation) {
            (Some(lhs), Some(operation)) if self.waiting_for_new_value => {
                Pending::AwaitingOperand { lhs, operation }
            }
            (Some(lhs), Some(operation)) => Pending::WithOperand { lhs, operation },
            _ => Pending::None,
        }
    }
}
