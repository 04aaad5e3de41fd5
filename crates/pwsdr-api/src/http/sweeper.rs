//! Background eviction of idle conversation sessions.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use pwsdr_core::conversation::registry::SessionRegistry;

/// Longest pause between sweeps regardless of the TTL.
const MAX_SWEEP_PERIOD: Duration = Duration::from_secs(60);

/// Start sweeping `sessions` for entries idle longer than `ttl`.
///
/// Returns `None` when `ttl` is zero (eviction disabled).
pub fn spawn_session_sweeper(sessions: SessionRegistry, ttl: Duration) -> Option<JoinHandle<()>> {
    if ttl.is_zero() {
        tracing::debug!("session eviction disabled");
        return None;
    }

    let period = ttl.min(MAX_SWEEP_PERIOD);
    tracing::debug!(ttl_secs = ttl.as_secs(), period_ms = period.as_millis() as u64, "session sweeper started");

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let evicted = sessions.evict_idle(ttl);
            if evicted > 0 {
                tracing::info!(evicted, active = sessions.len(), "evicted idle sessions");
            }
        }
    }))
}
