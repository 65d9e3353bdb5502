//! Display panel rendering.
//!
//! The panel shows the pending operation (staged operand and operator) as a
//! muted line above the main number, both right-aligned like a desk
//! calculator.

use crate::calculator::{CalculatorState, DisplayFormatter};

/// Minimum panel width in characters.
pub const MIN_PANEL_WIDTH: usize = 16;

/// What the renderer needs to paint the display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayView {
    /// The formatted display.
    pub primary: String,
    /// `"<staged operand> <operator>"` while an operation is pending.
    pub secondary: Option<String>,
    /// Whether the display holds the error sentinel.
    pub is_error: bool,
}

impl DisplayView {
    /// Build the view for a state.
    pub fn from_state(state: &CalculatorState, formatter: &DisplayFormatter) -> Self {
        let secondary = match (state.previous_value, state.operation) {
            (Some(value), Some(op)) => {
                Some(format!("{} {}", formatter.format_value(value), op))
            }
            _ => None,
        };

        Self {
            primary: formatter.format(&state.display),
            secondary,
            is_error: state.is_error(),
        }
    }
}

/// Render the view as two right-aligned lines.
pub fn render_display(view: &DisplayView) -> String {
    let secondary = view.secondary.as_deref().unwrap_or_default();
    let width = [
        MIN_PANEL_WIDTH,
        view.primary.chars().count(),
        secondary.chars().count(),
    ]
    .into_iter()
    .max()
    .unwrap_or(MIN_PANEL_WIDTH);

    format!("{secondary:>width$}\n{:>width$}", view.primary)
}
