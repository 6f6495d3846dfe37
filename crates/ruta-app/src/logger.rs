//! Logging setup
//!
//! `RUST_LOG` wins when set; otherwise INFO, or DEBUG with `--verbose`.
//! Log lines go to stderr so stdout stays clean for tables and JSON.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(default_level: LevelFilter) -> EnvFilter {
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    EnvFilter::try_new(rust_log).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            default_level,
            err,
        );
        EnvFilter::new(default_level.to_string())
    })
}

pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logger(verbose: bool) {
    let result = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter(default_level(verbose)))
        .try_init();
    if let Err(err) = result {
        eprintln!("logger already initialised: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_lowers_level() {
        assert_eq!(default_level(false), LevelFilter::INFO);
        assert_eq!(default_level(true), LevelFilter::DEBUG);
    }
}
