#![doc(test(attr(deny(warnings))))]

//! Leo Report turns a post-shipment workbook into monthly vehicle-quantity
//! and spares-value summaries, driven by `/leoMM [COUNTRY]` text commands.

pub mod cli;
pub mod command;
pub mod config;
pub mod currency;
pub mod dataset;
pub mod errors;
pub mod report;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Leo Report tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("leo_report=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
