//! Registry of active conversations, one per voice session.
//!
//! Backed by `DashMap` so sessions never contend with each other. Each
//! conversation sits behind its own `tokio::sync::Mutex` because a save
//! awaits the lead store while holding it; the map guard itself is never
//! held across `.await`.
//!
//! Sessions that nobody touches for a while are swept out by
//! [`SessionRegistry::evict_idle`]; a voice worker that crashes never sends
//! its DELETE.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::conversation::tracker::Conversation;

/// Shared handle to one conversation.
pub type ConversationHandle = Arc<Mutex<Conversation>>;

#[derive(Debug)]
struct SessionEntry {
    handle: ConversationHandle,
    last_activity: Instant,
}

impl SessionEntry {
    fn new(conversation: Conversation) -> Self {
        Self {
            handle: Arc::new(Mutex::new(conversation)),
            last_activity: Instant::now(),
        }
    }
}

/// Concurrent map of session id to conversation.
///
/// Cloning produces a shared view of the same sessions (backed by `Arc`).
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<DashMap<Uuid, SessionEntry>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new conversation and return its id.
    pub fn create(&self) -> Uuid {
        let conversation = Conversation::new();
        let id = conversation.id();
        self.inner.insert(id, SessionEntry::new(conversation));
        tracing::info!(session_id = %id, active = self.inner.len(), "session started");
        id
    }

    /// Handle to a conversation, marking it active. The handle is cloned out
    /// immediately so no map guard outlives this call.
    pub fn get(&self, id: &Uuid) -> Option<ConversationHandle> {
        self.inner.get_mut(id).map(|mut entry| {
            entry.last_activity = Instant::now();
            Arc::clone(&entry.handle)
        })
    }

    /// Drop a conversation. An unsaved draft is discarded.
    ///
    /// Returns `false` if the session did not exist.
    pub fn remove(&self, id: &Uuid) -> bool {
        match self.inner.remove(id) {
            Some(_) => {
                tracing::info!(session_id = %id, "session ended");
                true
            }
            None => false,
        }
    }

    /// Drop every session untouched for at least `ttl`, saved or not.
    ///
    /// A session whose handle is still held by a request in flight is kept.
    /// Returns the number of sessions evicted.
    pub fn evict_idle(&self, ttl: Duration) -> usize {
        let before = self.inner.len();
        self.inner.retain(|id, entry| {
            let keep =
                entry.last_activity.elapsed() < ttl || Arc::strong_count(&entry.handle) > 1;
            if !keep {
                tracing::info!(session_id = %id, "idle session evicted");
            }
            keep
        });
        before.saturating_sub(self.inner.len())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
