//! HTTP/REST API for the SDR agent.
//!
//! Axum-based API at `/api/v1/` with the envelope response format. The
//! voice worker (or any other client) drives sessions through it.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod sweeper;
