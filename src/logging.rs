use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber
///
/// `verbose` forces trace level for this crate; otherwise `RUST_LOG` is used,
/// falling back to warnings only.
pub fn enable_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), LevelFilter::TRACE))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
