//! Per-request visit recording.

use std::time::{SystemTime, UNIX_EPOCH};

use vistat_core::error::Result;
use vistat_core::visitor::VisitSnapshot;

use crate::config::CountPolicy;
use crate::store::VisitorStore;

/// Record one request: upsert -> sweep -> conditional increment -> read.
///
/// The sweep runs between the upsert and the reads, so the reported active
/// count always reflects post-sweep state and the current client is never
/// evicted by its own request.
pub async fn record_visit(
    store: &dyn VisitorStore,
    policy: CountPolicy,
    client_id: &str,
    update_requested: bool,
    now_ms: u64,
    threshold_ms: u64,
) -> Result<VisitSnapshot> {
    store.upsert_active(client_id, now_ms).await?;

    let evicted = store.sweep_inactive(now_ms, threshold_ms).await?;
    if evicted > 0 {
        tracing::debug!(evicted, "evicted inactive visitors");
    }

    let should_count = match policy {
        CountPolicy::EveryRequest => true,
        CountPolicy::WhenRequested => update_requested,
    };
    if should_count {
        store.increment_total().await?;
    }

    Ok(VisitSnapshot {
        total_visits: store.total_visits().await?,
        active_users: store.active_count().await?,
        client_id: client_id.to_string(),
    })
}

/// Wall-clock milliseconds since the UNIX epoch.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
