//! vistat gateway library entry.
//!
//! This crate wires the config layer, the visitor store, identity
//! resolution, and the HTTP surface into a small visit-counting service. It
//! is intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod identity;
pub mod obs;
pub mod router;
pub mod store;
pub mod visits;
