//! The converter: parse, then encode.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::encode::encode;
use crate::error::ConvertResult;
use crate::model::{BitWidth, SignForm, TargetBase};
use crate::parse::parse_literal;

/// Full account of a single conversion.
///
/// Big values are carried as decimal strings so the report stays exact when
/// serialized to JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    /// Literal as given, before separators are stripped.
    pub literal: String,
    pub base: TargetBase,
    pub bit_width: BitWidth,
    pub sign: SignForm,
    /// Radix the literal's digits were read in.
    pub source_radix: u32,
    /// Parsed value, not yet width-bound.
    pub parsed: String,
    /// Whether the sign-prefix reinterpretation made the value negative.
    pub normalized: bool,
    /// Value after wrapping into `[0, 2^bit_width)`.
    pub wrapped: String,
    /// Final rendered string.
    pub output: String,
}

/// Convert `literal` to `base` within a `bit_width`-bit two's-complement frame.
///
/// ```
/// use baseconvert_core::{convert, BitWidth};
///
/// let bits = BitWidth::new(8).unwrap();
/// assert_eq!(convert("-0b11111111", bits, 10).unwrap(), "-1");
/// assert_eq!(convert("255", bits, 16).unwrap(), "FF");
/// ```
pub fn convert(literal: &str, bit_width: BitWidth, base: u32) -> ConvertResult<String> {
    convert_detailed(literal, bit_width, base).map(|conversion| conversion.output)
}

/// Like [`convert`], but returns every intermediate value as well.
pub fn convert_detailed(literal: &str, bit_width: BitWidth, base: u32) -> ConvertResult<Conversion> {
    let base = TargetBase::try_from(base)?;
    let parsed = parse_literal(literal)?;
    let encoded = encode(&parsed.value, parsed.is_prefix_signed(), bit_width, base);

    debug!(literal, bits = bit_width.get(), base = base.radix(), output = %encoded.output, "converted literal");

    Ok(Conversion {
        literal: literal.to_string(),
        base,
        bit_width,
        sign: parsed.sign,
        source_radix: parsed.radix,
        parsed: parsed.value.to_string(),
        normalized: encoded.normalized,
        wrapped: encoded.wrapped.to_string(),
        output: encoded.output,
    })
}
