// src/logging.rs
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `treecmp=debug`.
pub const LOG_ENV: &str = "TREECMP_LOG";

/// Installs a stderr subscriber.
///
/// `TREECMP_LOG` wins when set; otherwise `verbosity` picks `warn`, `info`
/// or `debug`.
pub fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        debug!("tracing subscriber already installed");
    }
}
