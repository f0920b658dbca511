pub mod error;
pub mod facebook;
pub mod instagram;
pub mod tiktok;
pub mod types;

pub use error::{Result, SocialClientError};
pub use facebook::FacebookClient;
pub use instagram::InstagramClient;
pub use tiktok::TikTokClient;
pub use types::{
    FacebookAuthor, FacebookPost, InstagramMedia, ShareCount, Summary, SummaryEdge, TikTokVideo,
};

use serde::de::DeserializeOwned;

/// Base URL shared by the Facebook and Instagram Graph APIs.
pub const GRAPH_BASE_URL: &str = "https://graph.facebook.com";

/// Graph API version used for every Facebook and Instagram call.
pub const GRAPH_VERSION: &str = "v18.0";

/// Base URL of the TikTok open API.
pub const TIKTOK_BASE_URL: &str = "https://open.tiktokapis.com";

/// Turn a response into `T`, or an `Api` error carrying the body for non-2xx statuses.
pub(crate) async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SocialClientError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}
