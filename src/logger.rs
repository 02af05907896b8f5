//! `tracing` subscriber setup for programs embedding this crate.
//!
//! The library itself only emits events; nothing is printed until a
//! subscriber is installed.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a global fmt subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence unless `verbose` is set, which forces
/// `cheatsheet=debug`. Fails if a global subscriber is already installed.
pub fn init_logger(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("cheatsheet=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cheatsheet=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
