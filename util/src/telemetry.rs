//! Logging setup shared by the service binaries

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use tracing_subscriber::filter::LevelFilter;

/// Install the global tracing subscriber
///
/// The default directive is `level`, `RUST_LOG` overrides it. When `json` is
/// set the events are emitted as flattened JSON with file and line numbers,
/// which is the format our log aggregation expects in deployed environments.
///
/// Installing a second subscriber is ignored, tests may call this freely.
pub fn setup_system_logger(json: bool, level: LevelFilter) {
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    let registry = tracing_subscriber::registry().with(filter);

    let res = if json {
        registry
            .with(fmt::layer().with_file(true).with_line_number(true).json().flatten_event(true))
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    if let Err(e) = res {
        tracing::debug!("tracing subscriber already installed: {e}");
    }
}
