use async_trait::async_trait;
use tracing::{error, info, warn};

use affiliate_common::{AffiliateError, Config, Platform, Result, SocialPost};
use social_client::{FacebookClient, InstagramClient, SocialClientError, TikTokClient};

use crate::mock::mock_posts;
use crate::normalize::{from_facebook, from_instagram, from_tiktok};

/// Posts requested from each platform per aggregation.
pub const PAGE_SIZE: u32 = 10;

// --- PostSource trait ---

/// Live retrieval of one platform's popular posts.
#[async_trait]
pub trait PostSource: Send + Sync {
    fn platform(&self) -> Platform;
    async fn fetch(&self) -> Result<Vec<SocialPost>>;
}

fn upstream(err: SocialClientError) -> AffiliateError {
    AffiliateError::UpstreamRequestFailed(err.to_string())
}

fn not_configured(platform: Platform) -> AffiliateError {
    AffiliateError::ConfigurationMissing(format!(
        "{} API credentials not configured",
        platform.style().label
    ))
}

/// Fetch live posts, or the platform's mock list if anything goes wrong.
/// Never fails.
pub async fn fetch_or_mock(source: &dyn PostSource) -> Vec<SocialPost> {
    let platform = source.platform();
    match source.fetch().await {
        Ok(posts) => {
            info!(%platform, count = posts.len(), "Fetched live posts");
            posts
        }
        Err(AffiliateError::ConfigurationMissing(reason)) => {
            warn!(%platform, %reason, "Using mock posts");
            mock_posts(platform)
        }
        Err(e) => {
            error!(%platform, error = %e, "Error fetching posts, using mock posts");
            mock_posts(platform)
        }
    }
}

// --- Facebook ---

pub struct FacebookSource {
    client: Option<FacebookClient>,
}

impl FacebookSource {
    pub fn new(client: Option<FacebookClient>) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config
                .facebook_credentials()
                .map(|(token, page_id)| FacebookClient::new(token, page_id)),
        )
    }
}

#[async_trait]
impl PostSource for FacebookSource {
    fn platform(&self) -> Platform {
        Platform::Facebook
    }

    async fn fetch(&self) -> Result<Vec<SocialPost>> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| not_configured(Platform::Facebook))?;
        let posts = client.popular_posts(PAGE_SIZE).await.map_err(upstream)?;
        Ok(posts.into_iter().map(from_facebook).collect())
    }
}

// --- Instagram ---

pub struct InstagramSource {
    client: Option<InstagramClient>,
}

impl InstagramSource {
    pub fn new(client: Option<InstagramClient>) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config
                .instagram_credentials()
                .map(|(token, account_id)| InstagramClient::new(token, account_id)),
        )
    }
}

#[async_trait]
impl PostSource for InstagramSource {
    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    async fn fetch(&self) -> Result<Vec<SocialPost>> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| not_configured(Platform::Instagram))?;
        let media = client.popular_posts(PAGE_SIZE).await.map_err(upstream)?;
        Ok(media.into_iter().map(from_instagram).collect())
    }
}

// --- TikTok ---

pub struct TikTokSource {
    client: Option<TikTokClient>,
}

impl TikTokSource {
    pub fn new(client: Option<TikTokClient>) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tiktok_credentials().map(TikTokClient::new))
    }
}

#[async_trait]
impl PostSource for TikTokSource {
    fn platform(&self) -> Platform {
        Platform::TikTok
    }

    async fn fetch(&self) -> Result<Vec<SocialPost>> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| not_configured(Platform::TikTok))?;
        let videos = client.popular_posts(PAGE_SIZE).await.map_err(upstream)?;
        Ok(videos.into_iter().map(from_tiktok).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_sources_report_missing_configuration() {
        let config = Config::default();

        let fb = FacebookSource::from_config(&config).fetch().await.unwrap_err();
        let ig = InstagramSource::from_config(&config).fetch().await.unwrap_err();
        let tt = TikTokSource::from_config(&config).fetch().await.unwrap_err();

        assert_eq!(
            fb,
            AffiliateError::ConfigurationMissing("Facebook API credentials not configured".into())
        );
        assert!(matches!(ig, AffiliateError::ConfigurationMissing(_)));
        assert!(matches!(tt, AffiliateError::ConfigurationMissing(_)));
    }

    #[tokio::test]
    async fn fetch_or_mock_substitutes_mock_list_when_unconfigured() {
        let source = InstagramSource::new(None);
        let posts = fetch_or_mock(&source).await;

        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["ig_1", "ig_2", "ig_3", "ig_4"]);
    }
}
