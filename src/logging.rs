/// Log setup shared by the binaries.
///
/// Logs go to stderr so stdout carries nothing but the report. Verbosity
/// follows `RUST_LOG` and defaults to `info`.

use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
