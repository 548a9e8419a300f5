//! file: logging.rs
//! author: Jacob Xie
//! date: 2025/12/17 22:03:19 Wednesday
//! brief: tracing subscriber setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `RUST_LOG` filtering, `info` when unset or unparsable. Calling it again
/// keeps the first subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()
    {
        tracing::debug!(%err, "subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_keeps_running() {
        init();
        init();
        tracing::info!("still logging");
    }
}
