use foodie_client::ClientConfig;

/// Storefront configuration
///
/// # Environment
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | FOODIE_API_URL | http://localhost:3000/api | Backend base URL |
/// | REQUEST_TIMEOUT_SECS | 30 | HTTP request timeout (seconds) |
/// | DEFAULT_RESTAURANT_ID | 1 | Restaurant used when a menu item names none |
/// | LOG_LEVEL | info | Log filter when `RUST_LOG` is unset |
/// | LOG_JSON | false | Emit logs as JSON lines |
/// | LOG_DIR | (unset) | Directory for daily log files |
/// | ENVIRONMENT | development | Runtime environment |
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub default_restaurant_id: i64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl StorefrontConfig {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: var("FOODIE_API_URL")
                .unwrap_or_else(|| foodie_client::config::DEFAULT_BASE_URL.into()),
            request_timeout_secs: var("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(foodie_client::config::DEFAULT_TIMEOUT_SECS),
            default_restaurant_id: var("DEFAULT_RESTAURANT_ID")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: var("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: var("LOG_DIR").filter(|d| !d.trim().is_empty()),
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// REST client settings derived from this config
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.clone()).with_timeout(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
