use std::env;

use tracing::info;

use crate::error::{AffiliateError, Result};

const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Application configuration loaded from environment variables.
///
/// Every credential is optional. A platform counts as configured only when
/// all of its values are present and non-empty.
#[derive(Debug, Clone, Default)]
pub struct Config {
    // Facebook Graph API
    pub facebook_access_token: Option<String>,
    pub facebook_page_id: Option<String>,

    // Instagram Graph API
    pub instagram_access_token: Option<String>,
    pub instagram_business_account_id: Option<String>,

    // TikTok
    pub tiktok_access_token: Option<String>,

    // AI
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        config.log_keys();
        Ok(config)
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let web_port = match non_empty("WEB_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                AffiliateError::Validation(format!("WEB_PORT must be a number, got {raw:?}"))
            })?,
            None => 3000,
        };

        Ok(Self {
            facebook_access_token: non_empty("FACEBOOK_ACCESS_TOKEN"),
            facebook_page_id: non_empty("FACEBOOK_PAGE_ID"),
            instagram_access_token: non_empty("INSTAGRAM_ACCESS_TOKEN"),
            instagram_business_account_id: non_empty("INSTAGRAM_BUSINESS_ACCOUNT_ID"),
            tiktok_access_token: non_empty("TIKTOK_ACCESS_TOKEN"),
            anthropic_api_key: non_empty("ANTHROPIC_API_KEY"),
            anthropic_model: non_empty("ANTHROPIC_MODEL")
                .unwrap_or_else(|| DEFAULT_ANTHROPIC_MODEL.to_string()),
            web_host: non_empty("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_port,
        })
    }

    /// `(access_token, page_id)` when Facebook is fully configured.
    pub fn facebook_credentials(&self) -> Option<(&str, &str)> {
        Some((
            self.facebook_access_token.as_deref()?,
            self.facebook_page_id.as_deref()?,
        ))
    }

    /// `(access_token, business_account_id)` when Instagram is fully configured.
    pub fn instagram_credentials(&self) -> Option<(&str, &str)> {
        Some((
            self.instagram_access_token.as_deref()?,
            self.instagram_business_account_id.as_deref()?,
        ))
    }

    pub fn tiktok_credentials(&self) -> Option<&str> {
        self.tiktok_access_token.as_deref()
    }

    fn log_keys(&self) {
        fn preview(val: &Option<String>) -> String {
            match val {
                Some(v) => {
                    let n = v.chars().count().min(5);
                    let head: String = v.chars().take(n).collect();
                    format!("{head}...")
                }
                None => "(not set)".to_string(),
            }
        }

        info!(
            facebook_access_token = %preview(&self.facebook_access_token),
            facebook_page_id = %preview(&self.facebook_page_id),
            instagram_access_token = %preview(&self.instagram_access_token),
            instagram_business_account_id = %preview(&self.instagram_business_account_id),
            tiktok_access_token = %preview(&self.tiktok_access_token),
            anthropic_api_key = %preview(&self.anthropic_api_key),
            anthropic_model = %self.anthropic_model,
            "Loaded configuration"
        );
    }
}
