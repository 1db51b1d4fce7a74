//! Subscriber setup. Library crates only emit events; this is the one place
//! a subscriber is installed.
//!
//! Events never carry patient name or age.

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins when set, unless `verbose` forces debug.
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init(json: bool, verbose: bool) -> eyre::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| eyre::eyre!("failed to initialise logging: {e}"))
}
