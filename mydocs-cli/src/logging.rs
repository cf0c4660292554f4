use tracing_subscriber::{EnvFilter, fmt};

/// Installs the stderr log subscriber. Called once, before anything logs.
///
/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}
