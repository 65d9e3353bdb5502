//! Calculator module: the arithmetic engine and its display formatting.
//!
//! This module provides functionality to:
//! - Hold the calculator state as a plain value
//! - Transition that state in response to keypad actions
//! - Format the display for presentation

pub mod engine;
mod error;
mod format;
mod operation;
mod state;

pub use error::{CalcError, ERROR_DISPLAY};
pub use format::{DisplayFormatter, FormatOptions, format_display, format_number};
pub use operation::Operation;
pub use state::{CalculatorState, CompletedOperation, Pending};
