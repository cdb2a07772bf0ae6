//! Literal parsing.
//!
//! Grammar, after every `_` has been removed:
//! - optional `-0` (sign-prefix convention) or `0` prefix, stripped once;
//! - optional radix marker `b` / `o` / `x` selecting base 2 / 8 / 16;
//! - the digit run. Without a marker the whole remainder is read as a decimal,
//!   which may itself carry a leading `-`.
//!
//! The parsed value is not bound to any width yet; that is the encoder's job.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, Zero};
use tracing::debug;

use crate::error::{ConvertError, ConvertResult};
use crate::model::SignForm;

/// Result of parsing a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLiteral {
    /// Which sign convention the literal used.
    pub sign: SignForm,
    /// Radix the digit run was read in (2, 8, 10 or 16).
    pub radix: u32,
    /// Numeric value with any plain decimal sign applied.
    pub value: BigInt,
}

impl ParsedLiteral {
    /// True when the literal took the `-0<radix>` path.
    pub fn is_prefix_signed(&self) -> bool {
        self.sign == SignForm::PrefixSigned
    }
}

/// Parse a literal into its value and sign form.
///
/// Fails with [`ConvertError::Parse`] when a digit is invalid for the inferred
/// radix or the digit run is empty.
pub fn parse_literal(literal: &str) -> ConvertResult<ParsedLiteral> {
    let cleaned: String = literal.chars().filter(|c| *c != '_').collect();

    let (prefix_signed, stripped, rest) = if let Some(rest) = cleaned.strip_prefix("-0") {
        (true, true, rest)
    } else if let Some(rest) = cleaned.strip_prefix('0') {
        (false, true, rest)
    } else {
        (false, false, cleaned.as_str())
    };

    if stripped && rest.is_empty() {
        let sign = if prefix_signed { SignForm::PrefixSigned } else { SignForm::Unsigned };
        debug!(literal, sign = sign.as_str(), "literal is a bare zero");
        return Ok(ParsedLiteral { sign, radix: 10, value: BigInt::zero() });
    }

    let (radix, digits) = split_radix_marker(rest);
    let value = parse_digits(literal, digits, radix)?;

    let sign = if prefix_signed {
        SignForm::PrefixSigned
    } else if value.sign() == Sign::Minus {
        SignForm::PlainSigned
    } else {
        SignForm::Unsigned
    };

    debug!(literal, radix, sign = sign.as_str(), %value, "parsed literal");
    Ok(ParsedLiteral { sign, radix, value })
}

/// Split an optional radix marker off the front of `rest`.
fn split_radix_marker(rest: &str) -> (u32, &str) {
    match rest.as_bytes().first() {
        Some(b'b') => (2, &rest[1..]),
        Some(b'o') => (8, &rest[1..]),
        Some(b'x') => (16, &rest[1..]),
        _ => (10, rest),
    }
}

fn parse_digits(literal: &str, digits: &str, radix: u32) -> ConvertResult<BigInt> {
    let parsed = if radix == 10 {
        BigInt::from_str_radix(digits, radix)
    } else {
        // Marked digit runs are bit patterns; no sign allowed there.
        BigUint::from_str_radix(digits, radix).map(BigInt::from)
    };

    parsed.map_err(|source| ConvertError::Parse { literal: literal.to_string(), radix, source })
}
