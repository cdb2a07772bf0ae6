use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::BitWidth;

/// Environment variable naming a config file when no explicit path is given.
pub const CONFIG_ENV_VAR: &str = "BASECONVERT_CONFIG";

/// Bit width used when the caller does not supply one.
pub const DEFAULT_BIT_WIDTH: u32 = 32;

/// Largest bit width accepted unless configured otherwise.
pub const DEFAULT_MAX_BIT_WIDTH: u32 = 4096;

/// Serializable settings for the converter frontends.
///
/// Stored as JSON, e.g. `{ "default_bit_width": 8 }`. Missing fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Optional description / notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Bit width used when the command line omits one.
    pub default_bit_width: u32,
    /// Upper bound on accepted bit widths.
    pub max_bit_width: u32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            description: None,
            default_bit_width: DEFAULT_BIT_WIDTH,
            max_bit_width: DEFAULT_MAX_BIT_WIDTH,
        }
    }
}

impl ConverterConfig {
    /// Check internal consistency of the settings.
    pub fn validate(&self) -> Result<()> {
        if self.default_bit_width == 0 {
            return Err(anyhow!("default_bit_width must be at least 1"));
        }
        if self.max_bit_width == 0 {
            return Err(anyhow!("max_bit_width must be at least 1"));
        }
        if self.default_bit_width > self.max_bit_width {
            return Err(anyhow!(
                "default_bit_width {} exceeds max_bit_width {}",
                self.default_bit_width,
                self.max_bit_width
            ));
        }
        Ok(())
    }

    /// Resolve a requested bit width, falling back to the default.
    pub fn resolve_bit_width(&self, requested: Option<u32>) -> Result<BitWidth> {
        let bits = requested.unwrap_or(self.default_bit_width);
        if bits > self.max_bit_width {
            return Err(anyhow!(
                "Bit width {} exceeds the configured maximum of {}",
                bits,
                self.max_bit_width
            ));
        }
        BitWidth::new(bits).ok_or_else(|| anyhow!("Bit width must be at least 1"))
    }
}

/// Load and validate a converter config JSON file.
pub fn load_converter_config(path: &Path) -> Result<ConverterConfig> {
    let config_json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read converter config at {}", path.display()))?;
    let config: ConverterConfig =
        serde_json::from_str(&config_json).context("Failed to parse converter config JSON")?;
    config
        .validate()
        .with_context(|| format!("Invalid converter config at {}", path.display()))?;
    Ok(config)
}
