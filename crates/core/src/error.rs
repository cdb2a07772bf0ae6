use num_bigint::ParseBigIntError;
use thiserror::Error;

/// Error type for literal conversion.
///
/// There are exactly two failure kinds; both are fatal to the call and
/// no partial output is ever produced.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The literal holds a digit that is invalid for its inferred radix,
    /// or is otherwise unparseable (e.g. empty digit run after a radix marker).
    #[error("Invalid literal '{literal}' for radix {radix}: {source}")]
    Parse {
        literal: String,
        radix: u32,
        #[source]
        source: ParseBigIntError,
    },

    /// The requested base is not one of 2, 8, 10 or 16.
    #[error("Unsupported base {base}; expected one of 2, 8, 10, 16")]
    UnsupportedBase { base: u32 },
}

/// Convenience result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
