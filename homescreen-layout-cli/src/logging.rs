use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout carries only the JSON report.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` raises the level.
pub fn setup_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
