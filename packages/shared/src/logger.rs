//! Logger setup built on `tracing-subscriber`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG` when set; otherwise `{app_name}={default_level}`
/// plus `agora_chat={default_level}` is used. Calling this more than once is harmless:
/// the first subscriber wins and later calls only emit a debug line.
///
/// # Arguments
///
/// * `app_name` - Crate or binary name (hyphens are converted to underscores)
/// * `default_level` - Level used when `RUST_LOG` is not set (e.g. `"info"`, `"debug"`)
pub fn setup_logger(app_name: &str, default_level: &str) {
    let target = app_name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{target}={default_level},agora_chat={default_level}"
        ))
    });

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .try_init();

    if result.is_err() {
        tracing::debug!("Global tracing subscriber already installed; skipping setup");
    }
}
