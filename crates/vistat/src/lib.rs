//! Top-level facade crate for vistat.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use vistat_core::*;
}

pub mod gateway {
    pub use vistat_gateway::*;
}
