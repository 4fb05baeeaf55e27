use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::settings::{LogFormat, LoggingConfig, Settings};


/// Resolve the effective logging config and install it.
///
/// Level precedence: `level_override`, then settings, then "info".
pub fn run(settings: &Settings, level_override: Option<String>) -> LoggingConfig {
    let logging_config = resolve(settings, level_override);
    init_logging(&logging_config);
    logging_config
}

fn resolve(settings: &Settings, level_override: Option<String>) -> LoggingConfig {
    let base = settings.logging.clone().unwrap_or_default();
    match level_override {
        Some(level) => LoggingConfig::new(level, base.format),
        None => base,
    }
}

/// Initialize tracing with the desired config.
///
/// A second call is a no-op; the first installed subscriber stays.
pub fn init_logging(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_new(&cfg.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match cfg.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .flatten_event(true) // one flat object per line for log collectors
                .with_ansi(false);

            let _ = registry.with(layer).try_init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(true);

            let _ = registry.with(layer).try_init();
        }
    };
}


#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn override_wins_over_settings() {
        let settings = Settings {
            logging: Some(LoggingConfig::new("warn".into(), LogFormat::Json)),
        };
        let cfg = resolve(&settings, Some("trace".into()));
        assert_eq!(cfg.level, "trace");
        assert_eq!(cfg.format, LogFormat::Json);
    }

    #[test]
    #[serial]
    fn falls_back_to_info() {
        let cfg = resolve(&Settings::default(), None);
        assert_eq!(cfg, LoggingConfig::default());
    }

    #[test]
    fn init_twice_does_not_panic() {
        let cfg = LoggingConfig::default();
        init_logging(&cfg);
        init_logging(&cfg);
    }
}
