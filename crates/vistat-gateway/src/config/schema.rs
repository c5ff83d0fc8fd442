use serde::Deserialize;
use vistat_core::error::{Result, VistatError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisitConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub tracking: TrackingSection,

    /// Absent section means no persistence is configured; every request is
    /// answered with the degraded 503 body.
    #[serde(default)]
    pub store: Option<StoreSection>,
}

impl VisitConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(VistatError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.tracking.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.is_empty() {
            return Err(VistatError::BadRequest(
                "gateway.listen must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackingSection {
    /// Idle cutoff for the active set. A client idle strictly longer than
    /// this is evicted on the next request's sweep.
    #[serde(default = "default_inactivity_threshold_ms")]
    pub inactivity_threshold_ms: u64,

    #[serde(default)]
    pub count_policy: CountPolicy,
}

impl Default for TrackingSection {
    fn default() -> Self {
        Self {
            inactivity_threshold_ms: default_inactivity_threshold_ms(),
            count_policy: CountPolicy::default(),
        }
    }
}

impl TrackingSection {
    pub fn validate(&self) -> Result<()> {
        if !(1_000..=3_600_000).contains(&self.inactivity_threshold_ms) {
            return Err(VistatError::BadRequest(
                "tracking.inactivity_threshold_ms must be between 1000 and 3600000".into(),
            ));
        }
        Ok(())
    }
}

fn default_inactivity_threshold_ms() -> u64 {
    120_000
}

/// When the total-visit counter is incremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountPolicy {
    /// Every request counts.
    #[default]
    EveryRequest,
    /// Only requests carrying `x-update-total: true` count.
    WhenRequested,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default)]
    pub backend: StoreBackend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    #[default]
    Memory,
}
