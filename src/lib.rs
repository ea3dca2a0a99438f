#![doc(test(attr(deny(warnings))))]

//! Bank Core is a teaching-demo banking engine: a seeded in-memory account
//! set, pure balance/summary/projection derivation, session tracking, and the
//! command handlers a view drives them through.

pub mod bank;
pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Bank Core tracing initialized.");
    });
}
