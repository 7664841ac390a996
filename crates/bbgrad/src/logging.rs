//! Log setup for the binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter, e.g. `BBGRAD_LOG=bbgrad_core=debug`.
pub const LOG_ENV: &str = "BBGRAD_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Builds the filter: `--verbose` wins, then `BBGRAD_LOG`, then warnings only.
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a compact stderr subscriber. Stdout stays reserved for markup.
pub fn init(verbose: bool) {
    let result = fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .compact()
        .try_init();
    if let Err(e) = result {
        eprintln!("Note: logging disabled ({e})");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_filter() {
        assert_eq!(filter(true).to_string(), "debug");
    }
}
