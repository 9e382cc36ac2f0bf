//! Logging init: human-readable lines on stderr.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr at `level`. `RUST_LOG` directives, if set,
/// are applied on top (e.g. `RUST_LOG=talkfetch_core::fetch=trace`).
pub fn init_logging(level: LevelFilter) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
