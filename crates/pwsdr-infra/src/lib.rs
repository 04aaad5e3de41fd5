//! Infrastructure layer for the PW SDR agent.
//!
//! Contains implementations of the traits defined in `pwsdr-core`: the local
//! filesystem adapter, the JSON-file lead repository, the `config.toml`
//! loader, and the bootstrap that wires a deployment together.

pub mod bootstrap;
pub mod config;
pub mod filesystem;
pub mod lead;
