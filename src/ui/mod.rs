pub mod display;

pub use display::{DisplayView, render_display};
