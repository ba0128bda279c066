use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences to a default level.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global stderr subscriber. `RUST_LOG` overrides the
/// verbosity-derived level. Calling it twice is harmless.
pub fn init_logging(verbose: u8) {
    let level = level_for_verbosity(verbose);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: logging already initialized: {}", e);
    }
}
