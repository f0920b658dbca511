use tracing::{debug, info};

use crate::types::{FacebookPost, FacebookPublishInput, GraphId, GraphList};
use crate::{read_json, Result, GRAPH_BASE_URL, GRAPH_VERSION};

const POST_FIELDS: &str = "id,message,created_time,likes.summary(true),comments.summary(true),shares,full_picture,permalink_url,from";

/// Facebook Graph API client scoped to a single page.
#[derive(Clone)]
pub struct FacebookClient {
    client: reqwest::Client,
    access_token: String,
    page_id: String,
    base_url: String,
}

impl FacebookClient {
    pub fn new(access_token: impl Into<String>, page_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token: access_token.into(),
            page_id: page_id.into(),
            base_url: GRAPH_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn page_url(&self, edge: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url, GRAPH_VERSION, self.page_id, edge
        )
    }

    /// Fetch the most recent page posts with engagement summaries.
    pub async fn popular_posts(&self, limit: u32) -> Result<Vec<FacebookPost>> {
        let url = self.page_url("posts");
        debug!(page_id = %self.page_id, limit, "Fetching Facebook page posts");

        let limit_param = limit.to_string();
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("access_token", self.access_token.as_str()),
                ("fields", POST_FIELDS),
                ("limit", limit_param.as_str()),
            ])
            .send()
            .await?;

        let list: GraphList<FacebookPost> = read_json(resp).await?;
        info!(count = list.data.len(), "Fetched Facebook posts");
        Ok(list.data)
    }

    /// Publish to the page. With an image this goes through the photos edge,
    /// otherwise the feed edge. Returns the created object id.
    pub async fn publish(&self, message: &str, image_url: Option<&str>) -> Result<String> {
        let edge = if image_url.is_some() { "photos" } else { "feed" };
        let input = FacebookPublishInput {
            message,
            access_token: &self.access_token,
            url: image_url,
        };

        let resp = self
            .client
            .post(self.page_url(edge))
            .json(&input)
            .send()
            .await?;

        let created: GraphId = read_json(resp).await?;
        info!(page_id = %self.page_id, edge, id = %created.id, "Published to Facebook");
        Ok(created.id)
    }
}
