//! Business logic and repository trait definitions for the PW SDR agent.
//!
//! This crate defines the "ports" (repository and filesystem traits) that the
//! infrastructure layer implements, plus the conversation logic itself: FAQ
//! matching, closing-phrase detection, the per-session lead draft state
//! machine, and the agent instructions/tool surface. It depends only on
//! `pwsdr-types` -- never on `pwsdr-infra` or any IO crate.

pub mod agent;
pub mod conversation;
pub mod faq;
pub mod repository;
pub mod service;
