//! Conversation lifecycle: closing detection, lead draft tracking, and the
//! registry of active sessions.

pub mod closing;
pub mod registry;
pub mod tracker;

pub use closing::is_closing;
pub use registry::SessionRegistry;
pub use tracker::Conversation;
