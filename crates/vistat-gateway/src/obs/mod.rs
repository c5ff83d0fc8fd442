//! Lightweight in-process metrics (dependency-free).
//!
//! Minimal Prometheus-compatible counters without external crates. Metrics
//! are stored as atomics and rendered by the `/metrics` handler.

pub mod metrics;
