//! vistat core: domain records and the shared error surface.
//!
//! This crate defines the visit/active-visitor data model and the error
//! contract shared by the gateway and store backends. It intentionally
//! carries no transport or runtime dependencies so it can be reused in
//! multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `VistatError`/`Result` so production
//! processes do not crash on malformed input or store outages.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod visitor;

/// Shared result type.
pub use error::{Result, VistatError};
