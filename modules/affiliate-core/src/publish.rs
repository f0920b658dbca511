use tracing::{info, warn};

use affiliate_common::{AffiliateError, Config, Platform, Result};
use social_client::{FacebookClient, InstagramClient};

const TIKTOK_UNSUPPORTED: &str =
    "TikTok posting is not yet implemented. Please use TikTok's web interface.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub platform: Platform,
    pub content: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    pub platform: Platform,
    pub id: String,
    pub message: String,
}

/// Direct writes to the platforms' publishing APIs. One request per post
/// (two for Instagram), no retries.
#[derive(Clone, Default)]
pub struct Publisher {
    facebook: Option<FacebookClient>,
    instagram: Option<InstagramClient>,
}

impl Publisher {
    pub fn new(facebook: Option<FacebookClient>, instagram: Option<InstagramClient>) -> Self {
        Self {
            facebook,
            instagram,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config
                .facebook_credentials()
                .map(|(token, page_id)| FacebookClient::new(token, page_id)),
            config
                .instagram_credentials()
                .map(|(token, account_id)| InstagramClient::new(token, account_id)),
        )
    }

    pub async fn publish(&self, request: &PublishRequest) -> Result<PublishReceipt> {
        let image_url = request.image_url.as_deref().filter(|u| !u.is_empty());

        let id = match request.platform {
            Platform::TikTok => {
                warn!("Rejected TikTok publish request");
                return Err(AffiliateError::UnsupportedOperation(
                    TIKTOK_UNSUPPORTED.to_string(),
                ));
            }
            Platform::Facebook => {
                let client = self.facebook.as_ref().ok_or_else(|| {
                    AffiliateError::ConfigurationMissing(
                        "Facebook credentials not configured".to_string(),
                    )
                })?;
                client
                    .publish(&request.content, image_url)
                    .await
                    .map_err(|e| AffiliateError::UpstreamRequestFailed(e.to_string()))?
            }
            Platform::Instagram => {
                let client = self.instagram.as_ref().ok_or_else(|| {
                    AffiliateError::ConfigurationMissing(
                        "Instagram credentials not configured".to_string(),
                    )
                })?;
                let image_url = image_url.ok_or_else(|| {
                    AffiliateError::Validation("Instagram posts require an image".to_string())
                })?;
                client
                    .publish(&request.content, image_url)
                    .await
                    .map_err(|e| AffiliateError::UpstreamRequestFailed(e.to_string()))?
            }
        };

        info!(platform = %request.platform, %id, "Published post");
        Ok(PublishReceipt {
            platform: request.platform,
            id,
            message: format!("Successfully posted to {}", request.platform),
        })
    }
}
