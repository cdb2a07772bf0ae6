use std::path::Path;

use anyhow::{Context, Result};
use baseconvert_core::config::ConverterConfig;
use baseconvert_core::{convert_detailed, Conversion};
use tracing::debug;

use crate::load_config;

/// One conversion as requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConvertRequest {
    /// Literal to parse (`-0xFF`, `1_000`, ...).
    pub literal: String,
    /// Target base: 2, 8, 10 or 16.
    pub base: u32,
    /// Bit width; the configured default applies when omitted.
    pub bit_width: Option<u32>,
    /// Emit diagnostic lines ahead of the result.
    pub diagnostics: bool,
    /// Emit the full conversion report as JSON instead of plain text.
    pub json: bool,
}

/// Run a conversion and print it.
pub fn convert_command(request: &ConvertRequest, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    for line in conversion_output(request, &config)? {
        println!("{line}");
    }
    Ok(())
}

/// Produce the lines `convert_command` prints. The result is always the last line.
pub fn conversion_output(request: &ConvertRequest, config: &ConverterConfig) -> Result<Vec<String>> {
    let bit_width = config.resolve_bit_width(request.bit_width)?;
    debug!(literal = %request.literal, base = request.base, bits = bit_width.get(), "converting");

    let conversion = convert_detailed(&request.literal, bit_width, request.base)
        .with_context(|| format!("Failed to convert '{}'", request.literal))?;

    if request.json {
        let serialized = serde_json::to_string_pretty(&conversion)
            .context("Failed to serialize conversion to JSON")?;
        return Ok(vec![serialized]);
    }

    let mut lines = if request.diagnostics { diagnostic_lines(&conversion) } else { Vec::new() };
    lines.push(conversion.output);
    Ok(lines)
}

/// Human-readable trace of every conversion stage.
pub fn diagnostic_lines(conversion: &Conversion) -> Vec<String> {
    vec![
        format!("Value: {}", conversion.literal),
        format!("Base: {}", conversion.base),
        format!("Nbits: {}", conversion.bit_width),
        format!("Sign: {}", conversion.sign.as_str()),
        format!("Source radix: {}", conversion.source_radix),
        format!("Parsed: {}", conversion.parsed),
        format!("Normalized: {}", conversion.normalized),
        format!("Wrapped: {}", conversion.wrapped),
        format!("Output: {}", conversion.output),
        format!("Output size: {}", conversion.output.len()),
    ]
}
