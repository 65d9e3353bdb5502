//! Keyboard bindings.
//!
//! Translates key names into [`CalcEvent`]s, and parses compact key scripts
//! such as `12+3<Enter>` into event sequences.

use super::event::CalcEvent;
use crate::calculator::Operation;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// A named key like `<Enter>`, or any single non-whitespace character.
    static ref KEY_TOKEN: Regex = Regex::new(r"<([A-Za-z]+)>|(\S)").unwrap();
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("no binding for key `{0}`")]
    UnknownKey(String),
}

/// Look up the event bound to a key.
///
/// `key` is either a single character or a key name (`Enter`, `Escape`,
/// `Backspace`, and the short forms `Esc` and `BS`).
pub fn event_for_key(key: &str) -> Result<CalcEvent, KeyError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return event_for_char(c).ok_or_else(|| KeyError::UnknownKey(key.to_string()));
    }

    match key {
        "Enter" | "Return" => Ok(CalcEvent::Equals),
        "Escape" | "Esc" => Ok(CalcEvent::Clear),
        "Backspace" | "BS" => Ok(CalcEvent::Backspace),
        _ => Err(KeyError::UnknownKey(key.to_string())),
    }
}

fn event_for_char(c: char) -> Option<CalcEvent> {
    match c {
        '0'..='9' => Some(CalcEvent::Digit(c)),
        '.' => Some(CalcEvent::Decimal),
        '=' => Some(CalcEvent::Equals),
        'c' | 'C' => Some(CalcEvent::Clear),
        _ => Operation::from_symbol(c).map(CalcEvent::Operator),
    }
}

/// Parse a key script into events. Whitespace is ignored.
pub fn parse_key_script(script: &str) -> Result<Vec<CalcEvent>, KeyError> {
    KEY_TOKEN
        .captures_iter(script)
        .map(|caps| {
            let key = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            event_for_key(key)
        })
        .collect()
}
