use std::env;
use std::path::Path;
use std::sync::Once;

use anyhow::Result;
use baseconvert_core::config::{load_converter_config, ConverterConfig, CONFIG_ENV_VAR};

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only active when `RUST_LOG` is set
/// (e.g. `RUST_LOG=baseconvert_core=trace`); events go to stderr so stdout
/// keeps carrying just the result.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Load the converter config.
///
/// An explicit path wins, then `BASECONVERT_CONFIG`, then the built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<ConverterConfig> {
    if let Some(path) = explicit {
        return load_converter_config(path);
    }

    match env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => load_converter_config(Path::new(&path)),
        _ => Ok(ConverterConfig::default()),
    }
}
