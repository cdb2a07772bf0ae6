//! baseconvert-core
//!
//! Core library for reinterpreting integer literals inside a fixed-width
//! two's-complement frame and rendering them in another base.
//!
//! The converter is split into two stages:
//! - [`parse`]: literal text -> arbitrary-precision signed value plus the sign form it used.
//! - [`encode`]: value + bit width + target base -> wrapped, zero-padded string.
//!
//! Everything here is pure; argument parsing, output and exit codes live in the CLI crate.

pub mod config;
pub mod convert;
pub mod encode;
pub mod error;
pub mod model;
pub mod parse;

pub use convert::{convert, convert_detailed, Conversion};
pub use error::{ConvertError, ConvertResult};
pub use model::{BitWidth, SignForm, TargetBase};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
