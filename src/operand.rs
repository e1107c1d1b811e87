//! Operand lexing and resolution.
//!
//! A raw card token is classified by its lexical shape alone, never by the
//! instruction it belongs to. The marker prefixes are checked longest
//! first, then number literals, then hanzi, and anything left over is plain
//! text.

use crate::hanzi::is_hanzi;
use crate::vm::MEMORY_SLOTS;

/// Marker prefix for text-bank slot references.
const TEXT_SLOT_MARKER: &str = "文槽";
/// Marker prefix for numeric-bank slot references.
const NUMERIC_SLOT_MARKER: &str = "槽";

/// A resolved operand. Slot variants carry an index already checked
/// against the bank bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    None,
    Number(i64),
    NumericSlot(usize),
    TextSlot(usize),
    Hanzi(String),
    Text(String),
}

/// Resolve a raw operand token.
///
/// A malformed token (bad slot syntax, out-of-range slot index) is returned
/// as `Err` carrying the diagnostic; the engine aborts the step on it.
/// Everything else resolves, falling back to a plain text operand.
pub fn resolve_operand(token: Option<&str>) -> Result<Operand, String> {
    let token = match token {
        Some(t) => t,
        None => return Ok(Operand::None),
    };

    if let Some(rest) = token.strip_prefix(TEXT_SLOT_MARKER) {
        return match rest.parse::<i64>() {
            Ok(index) if (0..MEMORY_SLOTS as i64).contains(&index) => {
                Ok(Operand::TextSlot(index as usize))
            }
            Ok(index) => Err(format!("error: text slot {} out of range", index)),
            Err(_) => Err(format!("error: invalid text slot token '{}'", token)),
        };
    }

    if let Some(rest) = token.strip_prefix(NUMERIC_SLOT_MARKER) {
        return match rest.parse::<i64>() {
            Ok(index) if (0..MEMORY_SLOTS as i64).contains(&index) => {
                Ok(Operand::NumericSlot(index as usize))
            }
            Ok(index) => Err(format!("error: slot {} out of range", index)),
            Err(_) => Err(format!("error: invalid slot token '{}'", token)),
        };
    }

    if is_number(token) {
        return token
            .parse::<i64>()
            .map(Operand::Number)
            .map_err(|_| format!("error: invalid number '{}'", token));
    }

    if is_hanzi(token) {
        return Ok(Operand::Hanzi(token.to_string()));
    }

    Ok(Operand::Text(token.to_string()))
}

/// Optionally minus-signed, otherwise all ASCII digits.
fn is_number(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
