use std::path::PathBuf;

use anyhow::Result;
use baseconvert::commands::{convert_command, ConvertRequest};
use clap::Parser;

/// Fixed-width integer base converter.
///
/// This CLI is a thin wrapper around `baseconvert-core` (exposed in code as
/// `baseconvert_core`). The result is always the last line on stdout.
#[derive(Parser, Debug)]
#[command(
    name = "baseconvert",
    version,
    about = "Reinterpret an integer literal in a fixed-width two's-complement frame",
    long_about = None
)]
struct Cli {
    /// Integer literal: optional `-0`/`0` prefix, optional `b`/`o`/`x` radix marker,
    /// digits with optional `_` separators (e.g. `-0xFF`, `0b1010`, `1_000`, `-1`).
    #[arg(allow_hyphen_values = true)]
    literal: String,

    /// Target base: 2, 8, 10 or 16.
    base: u32,

    /// Bit width of the two's-complement frame. Defaults to the configured value (32).
    bit_width: Option<u32>,

    /// Any extra argument, even an empty one, prints diagnostic lines before the result.
    trailing: Option<String>,

    /// Path to a JSON config file. Falls back to `BASECONVERT_CONFIG`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the full conversion report as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    baseconvert::init_tracing();
    let cli = Cli::parse();

    let request = ConvertRequest {
        literal: cli.literal,
        base: cli.base,
        bit_width: cli.bit_width,
        diagnostics: cli.trailing.is_some(),
        json: cli.json,
    };
    convert_command(&request, cli.config.as_deref())?;

    Ok(())
}
