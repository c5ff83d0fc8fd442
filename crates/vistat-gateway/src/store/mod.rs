//! Persistence seam for visit state.
//!
//! Backed state is two collections: `activeUsers` keyed by client id, and a
//! single fixed-key `stats` record holding the running total. The shipped
//! backend keeps both in process memory; a document-store backend implements
//! the same trait and surfaces transport failures as `StoreUnavailable`.

pub mod memory;

use async_trait::async_trait;

use vistat_core::error::Result;
use vistat_core::visitor::ActiveEntry;

pub use memory::MemoryStore;

/// Store operations used by the request path.
///
/// Calls are short, bounded round trips. Nothing is retried; a failure
/// surfaces immediately so the handler can degrade the response.
#[async_trait]
pub trait VisitorStore: Send + Sync {
    /// Insert or refresh `client_id` in the active set. `first_seen` is set
    /// only on first insert; `last_active` moves to `now_ms` every time.
    async fn upsert_active(&self, client_id: &str, now_ms: u64) -> Result<()>;

    /// Evict every entry idle strictly longer than `threshold_ms`.
    /// Returns the number of evicted entries.
    async fn sweep_inactive(&self, now_ms: u64, threshold_ms: u64) -> Result<u64>;

    /// Current cardinality of the active set.
    async fn active_count(&self) -> Result<u64>;

    /// Add one to the stats record and return the new total.
    async fn increment_total(&self) -> Result<u64>;

    /// Current total-visit value. Never decreases.
    async fn total_visits(&self) -> Result<u64>;

    /// Look up a single active entry (diagnostics and tests).
    async fn get_active(&self, client_id: &str) -> Result<Option<ActiveEntry>>;
}
