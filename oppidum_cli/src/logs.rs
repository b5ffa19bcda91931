use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up the logging configuration for the CLI.
///
/// Two layers: stderr for the console (stdout is reserved for command
/// output) and a daily rotating file in the `logs/` directory. Levels are
/// controlled by `RUST_LOG`, defaulting to `info` for all crates and
/// `debug` for the oppidum crates.
pub fn setup_logging() {
    let file_appender = tracing_appender::rolling::daily("logs", "oppidum.log");
    let (non_blocking_file, _guard_file) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true);

    let default_filter = "info,oppidum=debug";

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    // The appender guard must outlive the process for the file layer to
    // flush; leaking it is fine for a short-lived binary.
    std::mem::forget(_guard_file);
}
