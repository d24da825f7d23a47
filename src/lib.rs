#![doc(test(attr(deny(warnings))))]

//! Auction Core implements the seller-side listing wizard of the marketplace:
//! draft models, the five-step flow with per-step validation, and submission
//! to a listing gateway.

pub mod cli;
pub mod config;
pub mod gateway;
pub mod listing;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Auction Core tracing initialized.");
    });
}
