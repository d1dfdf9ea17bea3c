//=========================================================================
// Logging
//=========================================================================
//
// One-time installation of the `env_logger` backend behind the `log`
// facade. Targets used across the crate:
//
//   engine            lifecycle, resources, services, frame statistics
//   tick              scheduler configuration and catch-up limits
//   platform          window creation and OS events
//   platform::input   input conversion and buffering
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::Once;

//=== External Dependencies ===============================================

use log::LevelFilter;

//=== Internal Dependencies ===============================================

use crate::core::config::LogDefs;

//=== LoggingConfig =======================================================

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax (e.g. `"info"` or
/// `"momokit=debug,winit=warn"`). `RUST_LOG` wins over `level` but not over
/// an explicit filter.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LevelFilter,
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl From<&LogDefs> for LoggingConfig {
    fn from(defs: &LogDefs) -> Self {
        Self {
            level: if defs.verbose { LevelFilter::Debug } else { LevelFilter::Info },
            ..Self::default()
        }
    }
}

//=== Initialization ======================================================

static INIT: Once = Once::new();

/// Installs the global logger once; later calls are ignored.
///
/// If another logger is already installed (test harnesses, embedding
/// applications) it is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &config.env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.level);
        }

        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!(target: "engine", "logging initialized at {}", config.level);
        }
    });
}

//=========================================================================
// Unit Tests
//=========================================================================
