//! Visit/active-visitor data model.

use serde::{Deserialize, Serialize};

/// One currently-active client, keyed externally by its opaque client id.
///
/// `first_seen_ms` is set on first insert and never touched again;
/// `last_active_ms` is refreshed on every request from that client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveEntry {
    pub first_seen_ms: u64,
    pub last_active_ms: u64,
}

impl ActiveEntry {
    /// Absolute-age cutoff: an entry expires once it has been idle strictly
    /// longer than `threshold_ms`.
    pub fn expired(&self, now_ms: u64, threshold_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_active_ms) > threshold_ms
    }
}

/// Counters reported to the caller after a recorded visit.
///
/// `total_visits` is monotonic; `active_users` reflects the registry state
/// after the expiry sweep for the current request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitSnapshot {
    pub total_visits: u64,
    pub active_users: u64,
    pub client_id: String,
}
