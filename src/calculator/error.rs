//! Arithmetic failures raised while committing a result.

use thiserror::Error;

/// The display text shown whenever a calculation fails.
pub const ERROR_DISPLAY: &str = "Error";

/// Why a binary operation could not produce a displayable number.
///
/// These never leave the engine: the engine turns them into the
/// [`ERROR_DISPLAY`] sentinel at the point a result would be committed.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    NonFinite,
}
