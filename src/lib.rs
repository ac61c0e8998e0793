#![doc(test(attr(deny(warnings))))]

//! Stay Core holds the booking rules of a vacation-rental marketplace:
//! stay pricing, visa-invitation eligibility, booking validation, listing
//! availability and search, and the admin dashboard aggregations.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Stay Core tracing initialized.");
    });
}
