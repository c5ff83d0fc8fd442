//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use vistat_core::error::{Result, VistatError};

pub use schema::{CountPolicy, GatewaySection, StoreBackend, StoreSection, TrackingSection, VisitConfig};

pub fn load_from_file(path: &str) -> Result<VisitConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| VistatError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<VisitConfig> {
    let cfg: VisitConfig = serde_yaml::from_str(s)
        .map_err(|e| VistatError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
