//! The calculator session: the one place the live state is replaced.

use crate::calculator::{CalculatorState, DisplayFormatter};
use crate::input::CalcEvent;
use crate::ui::DisplayView;

/// Owns the current state and applies events strictly in arrival order.
#[derive(Debug, Default)]
pub struct Session {
    state: CalculatorState,
    formatter: DisplayFormatter,
}

impl Session {
    /// Start a session at the initial state.
    pub fn new(formatter: DisplayFormatter) -> Self {
        Self {
            state: CalculatorState::default(),
            formatter,
        }
    }

    /// The current state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Apply one event, replacing the state.
    pub fn dispatch(&mut self, event: CalcEvent) {
        let next = event.apply(&self.state);
        tracing::trace!(
            event = %event.label(),
            from = %self.state.display,
            to = %next.display,
            "dispatch"
        );
        self.state = next;
    }

    /// Apply events one after another, in iteration order.
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = CalcEvent>) {
        for event in events {
            self.dispatch(event);
        }
    }

    /// The view the renderer paints.
    pub fn view(&self) -> DisplayView {
        DisplayView::from_state(&self.state, &self.formatter)
    }
}
