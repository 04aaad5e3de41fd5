//! Logging and optional trace export for the PW SDR agent.

pub mod tracing_setup;

pub use tracing_setup::{default_filter, init_tracing, shutdown_tracing};
