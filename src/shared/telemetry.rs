//! Tracing Setup
//!
//! Human-readable output in development, JSON everywhere else.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::domain::models::runtime_env::RuntimeEnv;

/// Default filter when `RUST_LOG` is unset
#[must_use]
pub fn default_filter(env: RuntimeEnv) -> &'static str {
    if env.is_development() {
        "kivant_db=debug,sqlx=warn,tower_http=debug"
    } else {
        "kivant_db=info,sqlx=error"
    }
}

/// Install the global subscriber
pub fn init_tracing(env: RuntimeEnv) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(env)));

    if env.is_development() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .init();
    }
}
