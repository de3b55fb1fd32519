//! Diagnostic logging.
//!
//! Log output always goes to stderr; stdout is reserved for the parsed
//! reference.

use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::PretrainError;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "PRETRAIN_PATH_LOG";

const DEFAULT_LOG_LEVEL: Level = Level::WARN;

fn detect_log_level(input: Option<&str>) -> Result<Option<Level>, PretrainError> {
    input
        .map(|level| {
            Level::from_str(level).map_err(|e| PretrainError::InvalidLogLevel {
                level: level.to_string(),
                message: e.to_string(),
            })
        })
        .transpose()
}

fn build_filter(log_level: Option<&str>) -> Result<EnvFilter, PretrainError> {
    // An explicit level wins over the environment.
    if let Some(level) = detect_log_level(log_level)? {
        return Ok(EnvFilter::builder()
            .with_default_directive(LevelFilter::from(level).into())
            .parse_lossy(""));
    }

    Ok(EnvFilter::builder()
        .with_default_directive(LevelFilter::from(DEFAULT_LOG_LEVEL).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy())
}

/// Installs the global stderr subscriber.
///
/// # Errors
/// Returns an error if `log_level` is not a valid level name or a global
/// subscriber is already installed.
pub fn init(log_level: Option<&str>) -> Result<(), PretrainError> {
    let filter = build_filter(log_level)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| PretrainError::LoggingInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_log_level() {
        let cases = [
            ("error", Level::ERROR),
            ("warn", Level::WARN),
            ("info", Level::INFO),
            ("debug", Level::DEBUG),
            ("TRACE", Level::TRACE),
        ];
        for (input, expected) in cases {
            assert_eq!(
                detect_log_level(Some(input)).expect("parse log level"),
                Some(expected)
            );
        }
        assert_eq!(detect_log_level(None).expect("no level"), None);
    }

    #[test]
    fn test_detect_log_level_invalid() {
        let err = detect_log_level(Some("loud")).unwrap_err();
        assert!(matches!(err, PretrainError::InvalidLogLevel { ref level, .. } if level == "loud"));
    }

    #[test]
    fn test_build_filter() {
        assert!(build_filter(Some("debug")).is_ok());
        assert!(build_filter(None).is_ok());
        assert!(build_filter(Some("nope")).is_err());
    }
}
