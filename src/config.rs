use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const ENV_PREFIX: &str = "HECM";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub brand_name: String,
    pub phone_cta: String,
    pub phone_display: String,
    pub nmls_id: String,
    pub port: u16,
    #[serde(default)]
    pub webhook_url: Option<String>,
    pub cors_allow_any: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_name: "Nationwide Equities".to_string(),
            phone_cta: "tel:+1-800-000-0000".to_string(),
            phone_display: "1-800-000-0000".to_string(),
            nmls_id: "123456".to_string(),
            port: 8080,
            webhook_url: None,
            cors_allow_any: true,
        }
    }
}

impl AppConfig {
    /// Defaults, then `.env`, then `HECM_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default("brand_name", defaults.brand_name)?
            .set_default("phone_cta", defaults.phone_cta)?
            .set_default("phone_display", defaults.phone_display)?
            .set_default("nmls_id", defaults.nmls_id)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("cors_allow_any", defaults.cors_allow_any)?
            .add_source(source)
            .build()?;

        let cfg: AppConfig = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.brand_name.trim().is_empty() {
            return Err(ConfigError::Invalid("brand_name must not be empty".to_string()));
        }
        if let Some(url) = self.webhook_url() {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "webhook_url must be an http(s) URL, got {url}"
                )));
            }
        }
        Ok(())
    }

    /// An empty `HECM_WEBHOOK_URL` disables forwarding.
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}
