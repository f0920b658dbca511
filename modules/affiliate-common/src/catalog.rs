use serde::{Deserialize, Serialize};

/// Where a catalogue post's original content was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SourcePlatform {
    Facebook,
    #[default]
    Instagram,
    Twitter,
    TikTok,
    LinkedIn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub affiliate_url: String,
    pub image: String,
}

/// A published blog post built around a social media find.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub social_platform: SourcePlatform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_post_text: Option<String>,
    pub affiliate_products: Vec<AffiliateProduct>,
}

/// Admin form input for a new post. Everything is optional on the wire;
/// required fields are checked when the draft is accepted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostDraft {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub social_platform: Option<SourcePlatform>,
    pub original_url: Option<String>,
    pub original_post_text: Option<String>,
    pub affiliate_products: Vec<ProductDraft>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub affiliate_url: Option<String>,
    pub image: Option<String>,
}
