use tracing::{debug, info};

use crate::types::{TikTokVideo, TikTokVideoList};
use crate::{read_json, Result, TIKTOK_BASE_URL};

const VIDEO_FIELDS: &str = "id,title,video_description,duration,cover_image_url,share_url,create_time,like_count,comment_count,share_count";

/// TikTok open API client for the authorized user's videos.
#[derive(Clone)]
pub struct TikTokClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl TikTokClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token: access_token.into(),
            base_url: TIKTOK_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// List the user's most recent videos.
    pub async fn popular_posts(&self, max_count: u32) -> Result<Vec<TikTokVideo>> {
        let url = format!("{}/v2/video/list/", self.base_url);
        debug!(max_count, "Fetching TikTok videos");

        let max_count_param = max_count.to_string();
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("fields", VIDEO_FIELDS),
                ("max_count", max_count_param.as_str()),
            ])
            .send()
            .await?;

        let list: TikTokVideoList = read_json(resp).await?;
        info!(count = list.data.videos.len(), "Fetched TikTok videos");
        Ok(list.data.videos)
    }
}
