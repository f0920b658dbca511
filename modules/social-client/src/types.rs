use serde::{Deserialize, Serialize};

/// Wrapper for Graph API list responses.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphList<T> {
    pub data: Vec<T>,
}

/// Object id returned by Graph API create calls.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphId {
    pub id: String,
}

// --- Facebook ---

/// A page post from `/{page-id}/posts`.
#[derive(Debug, Clone, Deserialize)]
pub struct FacebookPost {
    pub id: String,
    pub message: Option<String>,
    pub created_time: Option<String>,
    pub likes: Option<SummaryEdge>,
    pub comments: Option<SummaryEdge>,
    pub shares: Option<ShareCount>,
    pub full_picture: Option<String>,
    pub permalink_url: Option<String>,
    pub from: Option<FacebookAuthor>,
}

/// An edge requested with `.summary(true)`. Only the summary is read.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryEdge {
    pub summary: Option<Summary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Summary {
    pub total_count: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShareCount {
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacebookAuthor {
    pub name: Option<String>,
    pub id: Option<String>,
}

impl FacebookPost {
    pub fn like_count(&self) -> Option<i64> {
        self.likes.as_ref()?.summary.as_ref()?.total_count
    }

    pub fn comment_count(&self) -> Option<i64> {
        self.comments.as_ref()?.summary.as_ref()?.total_count
    }

    pub fn share_count(&self) -> Option<i64> {
        self.shares.as_ref()?.count
    }
}

/// Body for `/{page-id}/feed` and `/{page-id}/photos`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct FacebookPublishInput<'a> {
    pub message: &'a str,
    pub access_token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
}

// --- Instagram ---

/// A media object from `/{ig-user-id}/media`.
#[derive(Debug, Clone, Deserialize)]
pub struct InstagramMedia {
    pub id: String,
    pub caption: Option<String>,
    /// `IMAGE`, `VIDEO` or `CAROUSEL_ALBUM`.
    pub media_type: Option<String>,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub permalink: Option<String>,
    pub timestamp: Option<String>,
    pub like_count: Option<i64>,
    pub comments_count: Option<i64>,
    pub username: Option<String>,
}

impl InstagramMedia {
    pub fn is_video(&self) -> bool {
        self.media_type.as_deref() == Some("VIDEO")
    }
}

/// Body for the container-create step.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct InstagramContainerInput<'a> {
    pub image_url: &'a str,
    pub caption: &'a str,
    pub access_token: &'a str,
}

/// Body for the `media_publish` step.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct InstagramPublishInput<'a> {
    pub creation_id: &'a str,
    pub access_token: &'a str,
}

// --- TikTok ---

/// Envelope for `/v2/video/list/`.
#[derive(Debug, Clone, Deserialize)]
pub struct TikTokVideoList {
    pub data: TikTokVideoPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TikTokVideoPage {
    pub videos: Vec<TikTokVideo>,
    pub cursor: Option<i64>,
    pub has_more: Option<bool>,
}

/// A single video from the TikTok video list.
#[derive(Debug, Clone, Deserialize)]
pub struct TikTokVideo {
    pub id: String,
    pub title: Option<String>,
    pub video_description: Option<String>,
    pub duration: Option<i64>,
    pub cover_image_url: Option<String>,
    pub share_url: Option<String>,
    /// Unix seconds.
    pub create_time: Option<i64>,
    pub like_count: Option<i64>,
    pub comment_count: Option<i64>,
    pub share_count: Option<i64>,
}
