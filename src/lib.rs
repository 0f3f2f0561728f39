//! Venue Core provides the daily ledger, expense, and loan primitives behind a
//! small hospitality-business dashboard (bar, kitchen, gym, guest house,
//! billiard room), plus the storage seam and shell that drive them.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("venue_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Venue Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
