use tracing::{debug, info};

use crate::types::{
    GraphId, GraphList, InstagramContainerInput, InstagramMedia, InstagramPublishInput,
};
use crate::{read_json, Result, GRAPH_BASE_URL, GRAPH_VERSION};

const MEDIA_FIELDS: &str = "id,caption,media_type,media_url,thumbnail_url,permalink,timestamp,like_count,comments_count,username";

/// Instagram Graph API client scoped to a business account.
#[derive(Clone)]
pub struct InstagramClient {
    client: reqwest::Client,
    access_token: String,
    account_id: String,
    base_url: String,
}

impl InstagramClient {
    pub fn new(access_token: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token: access_token.into(),
            account_id: account_id.into(),
            base_url: GRAPH_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn account_url(&self, edge: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url, GRAPH_VERSION, self.account_id, edge
        )
    }

    /// Fetch the account's most recent media.
    pub async fn popular_posts(&self, limit: u32) -> Result<Vec<InstagramMedia>> {
        let url = self.account_url("media");
        debug!(account_id = %self.account_id, limit, "Fetching Instagram media");

        let limit_param = limit.to_string();
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("access_token", self.access_token.as_str()),
                ("fields", MEDIA_FIELDS),
                ("limit", limit_param.as_str()),
            ])
            .send()
            .await?;

        let list: GraphList<InstagramMedia> = read_json(resp).await?;
        info!(count = list.data.len(), "Fetched Instagram media");
        Ok(list.data)
    }

    /// Publish an image post: create a media container, then publish it.
    /// Returns the published media id.
    pub async fn publish(&self, caption: &str, image_url: &str) -> Result<String> {
        let container_input = InstagramContainerInput {
            image_url,
            caption,
            access_token: &self.access_token,
        };
        let resp = self
            .client
            .post(self.account_url("media"))
            .json(&container_input)
            .send()
            .await?;
        let container: GraphId = read_json(resp).await?;
        debug!(container_id = %container.id, "Instagram media container created");

        let publish_input = InstagramPublishInput {
            creation_id: &container.id,
            access_token: &self.access_token,
        };
        let resp = self
            .client
            .post(self.account_url("media_publish"))
            .json(&publish_input)
            .send()
            .await?;
        let published: GraphId = read_json(resp).await?;

        info!(account_id = %self.account_id, id = %published.id, "Published to Instagram");
        Ok(published.id)
    }
}
