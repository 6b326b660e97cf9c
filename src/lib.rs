//! Adaptive typing practice: per-key statistics, difficulty scoring, a
//! key-unlock curriculum and practice text biased toward weak keys.
//!
//! The terminal front end lives in the binary; everything here is usable
//! without a terminal.

pub mod config;
pub mod engine;
pub mod generator;
pub mod logging;
pub mod session;
pub mod store;
