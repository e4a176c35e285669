//! Process-wide tracing subscriber.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::LoggingSettings;

/// Installs the global subscriber. `RUST_LOG` overrides the configured level.
/// Calling this twice is harmless; the second install is ignored.
pub fn init_tracing(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.json {
        let layer = fmt::layer()
            .json()
            .with_ansi(false)
            .with_target(true)
            .with_level(true)
            .with_timer(fmt::time::UtcTime::rfc_3339());
        let _ = Registry::default().with(filter).with(layer).try_init();
    } else {
        let layer = fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_timer(fmt::time::UtcTime::rfc_3339());
        let _ = Registry::default().with(filter).with(layer).try_init();
    }
}
