//! Shared application state for the vistat gateway.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use vistat_core::error::Result;

use crate::config::{StoreBackend, VisitConfig};
use crate::obs::metrics::VisitorMetrics;
use crate::store::{MemoryStore, VisitorStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: VisitConfig,
    store: Option<Arc<dyn VisitorStore>>,
    metrics: Arc<VisitorMetrics>,
    store_warned: AtomicBool,
}

impl AppState {
    /// Build application state from config.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: VisitConfig) -> Result<Self> {
        let store: Option<Arc<dyn VisitorStore>> = match cfg.store.as_ref().map(|s| s.backend) {
            Some(StoreBackend::Memory) => Some(Arc::new(MemoryStore::new())),
            None => None,
        };
        Ok(Self::assemble(cfg, store))
    }

    /// Build state around an injected store (integration tests).
    pub fn with_store(cfg: VisitConfig, store: Arc<dyn VisitorStore>) -> Self {
        Self::assemble(cfg, Some(store))
    }

    fn assemble(cfg: VisitConfig, store: Option<Arc<dyn VisitorStore>>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                metrics: Arc::new(VisitorMetrics::default()),
                store_warned: AtomicBool::new(false),
            }),
        }
    }

    pub fn cfg(&self) -> &VisitConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> Option<Arc<dyn VisitorStore>> {
        self.inner.store.clone()
    }

    pub fn metrics(&self) -> &VisitorMetrics {
        &self.inner.metrics
    }

    /// The missing-store condition is error-logged once, then demoted to
    /// debug for subsequent requests.
    pub fn note_store_unconfigured(&self) {
        if !self.inner.store_warned.swap(true, Ordering::Relaxed) {
            tracing::error!("visit store is not configured; serving degraded responses");
        } else {
            tracing::debug!("visit store is not configured");
        }
    }
}
