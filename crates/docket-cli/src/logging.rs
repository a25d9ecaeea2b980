use crate::types::LogLevel;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber
///
/// `RUST_LOG` takes precedence over `--log-level` when set. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
pub fn init(level: LogLevel, no_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi(no_color, std::io::stderr().is_terminal()))
        .with_target(false)
        .without_time()
        .try_init();
}

fn use_ansi(no_color: bool, stderr_is_terminal: bool) -> bool {
    !no_color && stderr_is_terminal
}
