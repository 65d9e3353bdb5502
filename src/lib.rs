//! A four-function calculator engine.
//!
//! The engine in [`calculator`] is a set of pure transitions over
//! [`calculator::CalculatorState`]. [`input`] maps keys onto those
//! transitions, [`session`] owns the live state, and [`ui`] renders it.

pub mod calculator;
pub mod config;
pub mod input;
pub mod session;
pub mod ui;

pub use calculator::{CalculatorState, DisplayFormatter, Operation};
pub use config::Config;
pub use input::CalcEvent;
pub use session::Session;
