use thiserror::Error;

/// Errors loading the FAQ content document.
///
/// Fatal at startup: the agent cannot answer without content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file '{path}': {reason}")]
    Read { path: String, reason: String },

    #[error("failed to write default content to '{path}': {reason}")]
    Seed { path: String, reason: String },

    #[error("malformed content file '{path}': {reason}")]
    Malformed { path: String, reason: String },
}

/// Errors from the lead store.
///
/// A corrupt file on read is not an error (it is quarantined); these cover
/// failures that must reach the caller so a save is never falsely confirmed.
#[derive(Debug, Error)]
pub enum LeadStoreError {
    #[error("lead file I/O error: {0}")]
    Io(String),

    #[error("lead serialization error: {0}")]
    Serialization(String),
}

/// Errors driving a conversation through its lifecycle.
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("session not found")]
    SessionNotFound,

    #[error("conversation already saved")]
    AlreadySaved,

    #[error("unknown lead field: '{0}'")]
    UnknownField(String),

    #[error("failed to save lead: {0}")]
    Store(#[from] LeadStoreError),
}

/// Errors invoking an agent tool.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: '{0}'")]
    UnknownTool(String),

    #[error("invalid arguments for '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error("tool '{tool}' failed: {source}")]
    Failed {
        tool: String,
        #[source]
        source: LeadStoreError,
    },
}

/// Errors bringing a deployment up: content and the leads file must both
/// be usable before any session starts.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("failed to initialize leads file: {0}")]
    LeadStore(#[from] LeadStoreError),
}
