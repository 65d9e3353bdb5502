//! Input adapters: keypad events and keyboard bindings.

mod event;
pub mod keys;

pub use event::CalcEvent;
pub use keys::{KeyError, event_for_key, parse_key_script};
