//! Tracing initialization.
//!
//! The library only emits events; installing a subscriber is left to the
//! embedding process, which may call [`init_tracing`] once at startup.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    fn env_filter(&self) -> EngineResult<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level)
                .map_err(|e| EngineError::Telemetry(format!("bad filter '{}': {e}", self.level))),
        }
    }
}

/// Install a global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &LoggingConfig) -> EngineResult<()> {
    let env_filter = config.env_filter()?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json {
        registry
            .with(fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };
    result.map_err(|e| EngineError::Telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = LoggingConfig::default();
        assert_eq!(c.level, "info");
        assert!(!c.json);
    }

    #[test]
    fn second_init_fails_cleanly() {
        let config = LoggingConfig {
            level: "warn".into(),
            json: true,
        };
        let _ = init_tracing(&config);
        assert!(matches!(
            init_tracing(&config),
            Err(EngineError::Telemetry(_))
        ));
    }
}
