use std::sync::Once;

/// Logger setup for binaries built on the engine.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter directives, e.g. `"mogi=debug,wgpu=warn"`.
    /// Takes precedence over `RUST_LOG`.
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    /// Filter directives in effect for `rust_log` (the `RUST_LOG` value, if set).
    fn directives(&self, rust_log: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(rust_log)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| "info".to_string())
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` on first call; later calls do nothing.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let directives = config.directives(std::env::var("RUST_LOG").ok());

        let installed = env_logger::Builder::new()
            .parse_filters(&directives)
            .write_style(config.write_style)
            .try_init();

        // On failure the host application already owns the logger.
        if installed.is_ok() {
            log::debug!(target: "mogi", "logging initialized ({directives})");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_beats_rust_log() {
        let config = LoggingConfig::with_filter("mogi=trace");
        assert_eq!(config.directives(Some("warn".into())), "mogi=trace");
    }

    #[test]
    fn rust_log_then_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.directives(Some("warn".into())), "warn");
        assert_eq!(config.directives(None), "info");
        assert_eq!(config.directives(Some("  ".into())), "info");
    }
}
