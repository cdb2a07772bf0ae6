//! Value types shared by the parser and the encoder.
//!
//! - `BitWidth`: the two's-complement frame size (always non-zero).
//! - `TargetBase`: the output base and its padding rule.
//! - `SignForm`: which of the two sign conventions a literal used, if any.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ConvertResult};

/// Size of the two's-complement frame used for wrapping and padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitWidth(NonZeroU32);

impl BitWidth {
    /// Create a bit width. Returns `None` for zero.
    pub fn new(bits: u32) -> Option<Self> {
        NonZeroU32::new(bits).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Index of the sign bit, `bits - 1`.
    pub fn top_bit(self) -> u64 {
        u64::from(self.get() - 1)
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Output base of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetBase {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl TargetBase {
    /// Numeric radix of the base.
    pub fn radix(self) -> u32 {
        match self {
            TargetBase::Binary => 2,
            TargetBase::Octal => 8,
            TargetBase::Decimal => 10,
            TargetBase::Hexadecimal => 16,
        }
    }

    /// Number of characters the rendered digits are zero-padded to.
    ///
    /// Octal and decimal both use `bits / 3`. For decimal this is narrower than
    /// the real digit count at some widths (8 bits -> 2, yet 255 has 3 digits);
    /// output consumers rely on this exact width, so it stays.
    pub fn pad_width(self, width: BitWidth) -> usize {
        let bits = width.get() as usize;
        match self {
            TargetBase::Binary => bits,
            TargetBase::Octal | TargetBase::Decimal => bits / 3,
            TargetBase::Hexadecimal => bits / 4,
        }
    }
}

impl TryFrom<u32> for TargetBase {
    type Error = ConvertError;

    fn try_from(base: u32) -> ConvertResult<Self> {
        match base {
            2 => Ok(TargetBase::Binary),
            8 => Ok(TargetBase::Octal),
            10 => Ok(TargetBase::Decimal),
            16 => Ok(TargetBase::Hexadecimal),
            other => Err(ConvertError::UnsupportedBase { base: other }),
        }
    }
}

impl fmt::Display for TargetBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.radix())
    }
}

/// How a literal expressed its sign.
///
/// The two negative forms are deliberately kept apart: only `PrefixSigned`
/// takes part in sign reinterpretation during encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignForm {
    /// `-0<radix><digits>`: the digits are an unsigned bit pattern which is
    /// negative only if its top bit is set under the target width.
    PrefixSigned,
    /// A plain negative decimal such as `-1`; wrapped like any other value.
    PlainSigned,
    /// No sign at all.
    Unsigned,
}

impl SignForm {
    pub fn as_str(self) -> &'static str {
        match self {
            SignForm::PrefixSigned => "prefix-signed",
            SignForm::PlainSigned => "plain-signed",
            SignForm::Unsigned => "unsigned",
        }
    }
}
