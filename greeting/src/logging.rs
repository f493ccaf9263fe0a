//! Process-wide `tracing` subscriber for the handler binaries.
//!
//! Lambda's advanced logging controls are honoured: `AWS_LAMBDA_LOG_LEVEL`
//! picks the level when `RUST_LOG` is unset, and `AWS_LAMBDA_LOG_FORMAT=JSON`
//! switches to structured output. CloudWatch stamps every line itself, so no
//! timestamps are written.
//!
//! `lambda_runtime::tracing::init_default_subscriber` reads the same
//! variables but lets `AWS_LAMBDA_LOG_LEVEL` override `RUST_LOG`, which makes
//! per-module directives such as `greeting=trace` impossible once the
//! function has a console log level set. Here `RUST_LOG` wins, and the
//! resolution is a plain value ([`LogConfig`]) that can be checked without
//! installing a global subscriber.
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Line format written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable text
    Text,
    /// One JSON object per event
    Json,
}

/// Logging settings resolved from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives
    pub filter: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LogConfig {
    /// Read the settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the settings through `lookup`, which maps a variable name to its value
    ///
    /// Precedence: a non-blank `RUST_LOG`, then `AWS_LAMBDA_LOG_LEVEL`, then `info`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let filter = lookup("RUST_LOG")
            .filter(|directives| !directives.trim().is_empty())
            .or_else(|| lookup("AWS_LAMBDA_LOG_LEVEL").map(|level| lambda_level(&level)))
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let format = match lookup("AWS_LAMBDA_LOG_FORMAT") {
            Some(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        LogConfig { filter, format }
    }
}

// Lambda levels are upper case and include FATAL, which tracing lacks.
fn lambda_level(level: &str) -> String {
    match level.trim().to_ascii_lowercase().as_str() {
        "fatal" => "error".to_string(),
        "" => DEFAULT_FILTER.to_string(),
        other => other.to_string(),
    }
}

/// Install the global subscriber using settings from the environment.
///
/// Call once, before handing control to the runtime.
pub fn init() {
    init_with(LogConfig::from_env())
}

/// Install the global subscriber with explicit settings.
pub fn init_with(config: LogConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .without_time();

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::{LogConfig, LogFormat};
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> LogConfig {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        LogConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_info_text() {
        assert_eq!(config(&[]), LogConfig::default());
    }

    #[test]
    fn rust_log_wins() {
        let cfg = config(&[("RUST_LOG", "greeting=trace"), ("AWS_LAMBDA_LOG_LEVEL", "WARN")]);
        assert_eq!(cfg.filter, "greeting=trace");
    }

    #[test]
    fn lambda_level_is_lowered() {
        assert_eq!(config(&[("AWS_LAMBDA_LOG_LEVEL", "DEBUG")]).filter, "debug");
        assert_eq!(config(&[("AWS_LAMBDA_LOG_LEVEL", "FATAL")]).filter, "error");
    }

    #[test]
    fn blank_rust_log_falls_through() {
        let cfg = config(&[("RUST_LOG", " "), ("AWS_LAMBDA_LOG_LEVEL", "WARN")]);
        assert_eq!(cfg.filter, "warn");
    }

    #[test]
    fn json_format() {
        assert_eq!(config(&[("AWS_LAMBDA_LOG_FORMAT", "JSON")]).format, LogFormat::Json);
        assert_eq!(config(&[("AWS_LAMBDA_LOG_FORMAT", "Text")]).format, LogFormat::Text);
    }
}
