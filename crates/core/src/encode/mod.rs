//! Fixed-width encoding.
//!
//! Three steps, in order:
//! 1. sign normalization for `-0<radix>` literals whose top bit is set;
//! 2. wrap into `[0, 2^bits)`;
//! 3. render in the target base with that base's zero-padding rule.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;
use tracing::trace;

use crate::model::{BitWidth, TargetBase};

/// Intermediate and final results of one encoding pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Whether step 1 reinterpreted the value as negative.
    pub normalized: bool,
    /// Value reduced into `[0, 2^bits)`.
    pub wrapped: BigUint,
    /// Rendered, zero-padded output.
    pub output: String,
}

/// `2^bits`, the size of the two's-complement frame.
pub fn modulus(width: BitWidth) -> BigInt {
    BigInt::one() << width.get()
}

/// Reinterpret a sign-prefixed value as negative if its top bit is set.
///
/// Returns the possibly adjusted value and whether the adjustment happened.
/// Values without the sign prefix pass through untouched, negative or not.
pub fn normalize_sign(value: &BigInt, signed_prefix: bool, width: BitWidth) -> (BigInt, bool) {
    if signed_prefix && value.bit(width.top_bit()) {
        (value - modulus(width), true)
    } else {
        (value.clone(), false)
    }
}

/// Reduce `value` into `[0, 2^bits)`.
///
/// Magnitudes wider than the frame are truncated silently.
pub fn wrap(value: &BigInt, width: BitWidth) -> BigUint {
    let modulus = modulus(width);
    let mut rem = value % &modulus;
    if rem.sign() == Sign::Minus {
        rem += &modulus;
    }
    rem.into_parts().1
}

/// Run all three encoding steps.
pub fn encode(value: &BigInt, signed_prefix: bool, width: BitWidth, base: TargetBase) -> Encoded {
    let (normalized_value, normalized) = normalize_sign(value, signed_prefix, width);
    let wrapped = wrap(&normalized_value, width);
    let output = render(&wrapped, normalized, width, base);

    trace!(%value, signed_prefix, normalized, %wrapped, bits = width.get(), base = base.radix(), %output, "encoded value");
    Encoded { normalized, wrapped, output }
}

/// Render a wrapped value.
///
/// Decimal output shows the signed value when `normalized` is set; every other
/// base shows the unsigned bit pattern. Hex digits are uppercase.
pub fn render(wrapped: &BigUint, normalized: bool, width: BitWidth, base: TargetBase) -> String {
    let digits = match base {
        TargetBase::Decimal if normalized => {
            (BigInt::from(wrapped.clone()) - modulus(width)).to_str_radix(10)
        }
        TargetBase::Hexadecimal => wrapped.to_str_radix(16).to_ascii_uppercase(),
        other => wrapped.to_str_radix(other.radix()),
    };

    zero_pad(&digits, base.pad_width(width))
}

/// Left-pad with zeros to `width` characters, keeping a leading `-` in front.
///
/// Never truncates: output already at or past `width` is returned as is.
pub fn zero_pad(digits: &str, width: usize) -> String {
    if digits.len() >= width {
        return digits.to_string();
    }

    let fill = "0".repeat(width - digits.len());
    match digits.strip_prefix('-') {
        Some(body) => format!("-{fill}{body}"),
        None => format!("{fill}{digits}"),
    }
}
