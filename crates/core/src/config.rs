use serde::Deserialize;

use crate::error::{AdapterError, AdapterResult};

/// Adapter configuration. Loaded from environment variables with the
/// prefix `ZEDO_ADAPTER__`; every field falls back to the production value.
#[derive(Debug, Clone, Deserialize)]
pub struct AdapterConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_user_sync_url")]
    pub user_sync_url: String,
    /// Host adapter version embedded in every placement.
    #[serde(default = "default_adapter_version")]
    pub adapter_version: String,
    /// Share of the raw ad-server price passed on as the bid cpm.
    #[serde(default = "default_revenue_share")]
    pub revenue_share: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_net_revenue")]
    pub net_revenue: bool,
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u32,
    /// Creative-detail types that carry directly renderable markup.
    #[serde(default = "default_renderable_types")]
    pub renderable_types: Vec<String>,
}

// Default functions
fn default_endpoint() -> String {
    "//z2.zedo.com/asw/fmb.json".to_string()
}
fn default_user_sync_url() -> String {
    "//d3.zedo.com/rs/us/fcs.html".to_string()
}
fn default_adapter_version() -> String {
    "$prebid.version$".to_string()
}
fn default_revenue_share() -> f64 {
    0.7
}
fn default_currency() -> String {
    "USD".to_string()
}
fn default_net_revenue() -> bool {
    true
}
fn default_ttl_secs() -> u32 {
    300
}
fn default_renderable_types() -> Vec<String> {
    vec!["StdBanner".to_string(), "VAST".to_string()]
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_sync_url: default_user_sync_url(),
            adapter_version: default_adapter_version(),
            revenue_share: default_revenue_share(),
            currency: default_currency(),
            net_revenue: default_net_revenue(),
            ttl_secs: default_ttl_secs(),
            renderable_types: default_renderable_types(),
        }
    }
}

impl AdapterConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Self::environment())
    }

    /// Environment source for `ZEDO_ADAPTER__*` variables.
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("ZEDO_ADAPTER")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("renderable_types")
    }

    pub fn load_from(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(environment);

        let config = builder.build()?;
        config.try_deserialize()
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.adapter_version = version.into();
        self
    }

    pub fn validate(&self) -> AdapterResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(AdapterError::Config("endpoint must not be empty".into()));
        }
        if !(self.revenue_share > 0.0 && self.revenue_share <= 1.0) {
            return Err(AdapterError::Config(format!(
                "revenue_share must be in (0, 1], got {}",
                self.revenue_share
            )));
        }
        if self.renderable_types.is_empty() {
            return Err(AdapterError::Config(
                "renderable_types must list at least one creative type".into(),
            ));
        }
        Ok(())
    }

    pub fn is_renderable(&self, creative_type: &str) -> bool {
        self.renderable_types.iter().any(|t| t == creative_type)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
