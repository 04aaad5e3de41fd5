//! HTTP request handlers for the REST API.

pub mod agent;
pub mod faq;
pub mod lead;
pub mod session;
pub mod tool;
