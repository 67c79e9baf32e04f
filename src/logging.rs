//! Tracing subscriber setup for the CLI

use crate::constants::logging::{DEFAULT_FILTER, VERBOSE_FILTER};
use tracing_subscriber::EnvFilter;

/// Pick the log filter: `--verbose` wins, then RUST_LOG, then the default
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber, writing to stderr
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_verbose_filter() {
        assert_eq!(filter(true).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
