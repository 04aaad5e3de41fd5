//! Shared domain types for the PW SDR agent.
//!
//! This crate contains the core domain types used across the workspace:
//! FAQ content, lead records and drafts, conversation phases, tool
//! arguments, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod content;
pub mod conversation;
pub mod error;
pub mod lead;
pub mod tool;
