//! Utility Billing - Console Binary
//!
//! Runs an interactive billing session on stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin utility-console
//!
//! # Reproducible simulated readings and debug logs
//! BILLING_METER_SEED=42 BILLING_LOG_LEVEL=debug cargo run --bin utility-console
//! ```
//!
//! # Environment Variables
//!
//! * `BILLING_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `BILLING_UNIT_RATE` - Charge per consumed unit (default: 10)
//! * `BILLING_TAX_RATE` - Tax rate as a decimal (default: 0.025)
//! * `BILLING_MAX_UNITS` - Exclusive bound of simulated units (default: 100)
//! * `BILLING_MAX_ADJUSTMENT` - Exclusive bound of simulated adjustments (default: 50)
//! * `BILLING_METER_SEED` - Seed for the simulated meter (default: random)

use std::io;

use anyhow::Context;
use interface_console::{config::ConsoleConfig, session::Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = ConsoleConfig::from_env().context("failed to load BILLING_* configuration")?;
    config.validate()?;

    init_tracing(&config.log_level);

    let tariff = config.tariff();
    tracing::info!(
        unit_rate = %tariff.unit_rate,
        tax_rate = %tariff.tax_rate,
        seeded = config.meter_seed.is_some(),
        "starting utility billing console"
    );

    let stdout = io::stdout();
    let mut session = Session::new(config.registry_builder(), stdout.lock()).with_prompt();
    session.run(io::stdin().lock())?;

    tracing::info!("console closed");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so that reports on stdout stay readable.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .init();
}
