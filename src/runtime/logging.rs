use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mixtape::config::LoggingSettings;

/// Install the global subscriber. `RUST_LOG` wins over the configured filter.
pub fn init(settings: &LoggingSettings, verbose: bool) {
    let filter = if verbose {
        "mixtape=debug"
    } else {
        settings.filter.as_str()
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
