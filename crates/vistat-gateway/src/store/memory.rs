use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use vistat_core::error::Result;
use vistat_core::visitor::ActiveEntry;

use super::VisitorStore;

/// In-process backend: `DashMap` for the active set, `AtomicU64` for the
/// total. Safe under concurrent request handlers; never fails.
#[derive(Default)]
pub struct MemoryStore {
    active: DashMap<String, ActiveEntry>,
    total: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VisitorStore for MemoryStore {
    async fn upsert_active(&self, client_id: &str, now_ms: u64) -> Result<()> {
        self.active
            .entry(client_id.to_string())
            .and_modify(|e| e.last_active_ms = now_ms)
            .or_insert(ActiveEntry {
                first_seen_ms: now_ms,
                last_active_ms: now_ms,
            });
        Ok(())
    }

    async fn sweep_inactive(&self, now_ms: u64, threshold_ms: u64) -> Result<u64> {
        let before = self.active.len() as u64;
        self.active.retain(|_, e| !e.expired(now_ms, threshold_ms));
        Ok(before.saturating_sub(self.active.len() as u64))
    }

    async fn active_count(&self) -> Result<u64> {
        Ok(self.active.len() as u64)
    }

    async fn increment_total(&self) -> Result<u64> {
        Ok(self.total.fetch_add(1, Ordering::Relaxed) + 1)
    }

    async fn total_visits(&self) -> Result<u64> {
        Ok(self.total.load(Ordering::Relaxed))
    }

    async fn get_active(&self, client_id: &str) -> Result<Option<ActiveEntry>> {
        Ok(self.active.get(client_id).map(|r| *r.value()))
    }
}
