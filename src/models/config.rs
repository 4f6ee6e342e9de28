//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Endpoints and HTTP settings for the REST gateway.
pub struct ApiConfig {
    /// Base URL of the CRM backend, without a trailing slash.
    pub base_url: String,
    /// Public reverse-geocoding endpoint used for address autocomplete.
    pub geocode_url: String,
    /// Public country-lookup endpoint.
    pub countries_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("hireflow-crm-client/{}", env!("CARGO_PKG_VERSION"))
}

impl ApiConfig {
    /// Loads configuration from a YAML file, with `CRM_`-prefixed environment
    /// variables taking precedence.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("CRM"))
            .build()?
            .try_deserialize()
    }
}
