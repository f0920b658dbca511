use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AffiliateError;

// --- Platforms ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    TikTok,
}

impl Platform {
    /// Aggregation order: results are concatenated in this order before ranking.
    pub const ALL: [Platform; 3] = [Platform::Facebook, Platform::Instagram, Platform::TikTok];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::TikTok => "tiktok",
        }
    }

    /// Display metadata for rendering a post card.
    pub fn style(&self) -> PlatformStyle {
        match self {
            Platform::Facebook => PlatformStyle {
                platform: *self,
                label: "Facebook",
                icon: "facebook",
                color: "text-blue-600",
            },
            Platform::Instagram => PlatformStyle {
                platform: *self,
                label: "Instagram",
                icon: "instagram",
                color: "text-pink-600",
            },
            Platform::TikTok => PlatformStyle {
                platform: *self,
                label: "TikTok",
                icon: "message-circle",
                color: "text-black",
            },
        }
    }

    /// Label used for posts whose upstream payload omits the author.
    pub fn default_author(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook User",
            Platform::Instagram => "Instagram User",
            Platform::TikTok => "TikTok User",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = AffiliateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "facebook" => Ok(Platform::Facebook),
            "instagram" => Ok(Platform::Instagram),
            "tiktok" => Ok(Platform::TikTok),
            other => Err(AffiliateError::Validation(format!("Invalid platform: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformStyle {
    pub platform: Platform,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

// --- Social posts ---

/// A post from one of the social platforms, normalized to a common shape.
///
/// Engagement counters are always present; upstream gaps are filled with 0
/// before a `SocialPost` is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    pub id: String,
    pub platform: Platform,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub author: String,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub created_at: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SocialPost {
    /// Likes + comments + shares. The only ranking key.
    pub fn engagement(&self) -> u64 {
        self.likes
            .saturating_add(self.comments)
            .saturating_add(self.shares)
    }
}

// --- Rewrite options ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    #[default]
    Casual,
    Enthusiastic,
    Informative,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Informative => "informative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    /// Word-count guidance handed to the model. Not enforced on the output.
    pub fn guidance(&self) -> &'static str {
        match self {
            Length::Short => "Keep it under 100 words, concise and punchy.",
            Length::Medium => "Keep it between 100-200 words, engaging and informative.",
            Length::Long => "Make it detailed and comprehensive, 200-300 words.",
        }
    }
}

/// Target platform for a rewrite. Unlike [`Platform`] this includes `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePlatform {
    Facebook,
    Instagram,
    TikTok,
    #[default]
    General,
}

impl StylePlatform {
    pub fn guidance(&self) -> &'static str {
        match self {
            StylePlatform::Facebook => "Optimize for Facebook with a conversational tone that encourages engagement and shares.",
            StylePlatform::Instagram => "Make it Instagram-friendly with visual appeal, consider adding line breaks for readability.",
            StylePlatform::TikTok => "Make it TikTok-style: trendy, energetic, and attention-grabbing from the first word.",
            StylePlatform::General => "Make it suitable for any social media platform.",
        }
    }
}

impl From<Platform> for StylePlatform {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Facebook => StylePlatform::Facebook,
            Platform::Instagram => StylePlatform::Instagram,
            Platform::TikTok => StylePlatform::TikTok,
        }
    }
}

/// Style options for one rewrite call. Every field has a default, so `{}`
/// deserializes to casual / medium / general with hashtags and emojis on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RewriteOptions {
    pub tone: Tone,
    pub length: Length,
    pub platform: StylePlatform,
    pub include_hashtags: bool,
    pub include_emojis: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            tone: Tone::default(),
            length: Length::default(),
            platform: StylePlatform::default(),
            include_hashtags: true,
            include_emojis: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(likes: u64, comments: u64, shares: u64) -> SocialPost {
        SocialPost {
            id: "x".into(),
            platform: Platform::Facebook,
            content: String::new(),
            image_url: None,
            video_url: None,
            author: "a".into(),
            likes,
            comments,
            shares,
            created_at: "2024-01-01T00:00:00.000Z".into(),
            url: String::new(),
            category: None,
        }
    }

    #[test]
    fn engagement_sums_all_counters() {
        assert_eq!(post(1543, 287, 156).engagement(), 1986);
        assert_eq!(post(3287, 156, 0).engagement(), 3443);
    }

    #[test]
    fn engagement_saturates() {
        assert_eq!(post(u64::MAX, 1, 1).engagement(), u64::MAX);
    }

    #[test]
    fn social_post_serializes_camel_case_and_omits_absent_media() {
        let mut p = post(1, 2, 3);
        p.image_url = Some("https://img".into());
        let json = serde_json::to_value(&p).unwrap();

        assert_eq!(json["imageUrl"], "https://img");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00.000Z");
        assert_eq!(json["platform"], "facebook");
        assert!(json.get("videoUrl").is_none());
        assert!(json.get("category").is_none());
    }

    #[test]
    fn platform_parses_only_known_values() {
        assert_eq!("tiktok".parse::<Platform>().unwrap(), Platform::TikTok);
        assert_eq!("instagram".parse::<Platform>().unwrap(), Platform::Instagram);
        assert!(matches!(
            "twitter".parse::<Platform>(),
            Err(AffiliateError::Validation(_))
        ));
        assert!("Facebook".parse::<Platform>().is_err());
    }

    #[test]
    fn platform_style_is_total() {
        for platform in Platform::ALL {
            let style = platform.style();
            assert_eq!(style.platform, platform);
            assert!(!style.icon.is_empty());
            assert!(style.color.starts_with("text-"));
        }
        assert_eq!(Platform::TikTok.style().label, "TikTok");
    }

    #[test]
    fn rewrite_options_default_from_empty_object() {
        let opts: RewriteOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, RewriteOptions::default());
        assert_eq!(opts.tone, Tone::Casual);
        assert_eq!(opts.length, Length::Medium);
        assert_eq!(opts.platform, StylePlatform::General);
        assert!(opts.include_hashtags);
        assert!(opts.include_emojis);
    }

    #[test]
    fn rewrite_options_partial_override() {
        let opts: RewriteOptions = serde_json::from_value(serde_json::json!({
            "tone": "professional",
            "platform": "tiktok",
            "includeEmojis": false
        }))
        .unwrap();
        assert_eq!(opts.tone, Tone::Professional);
        assert_eq!(opts.length, Length::Medium);
        assert_eq!(opts.platform, StylePlatform::TikTok);
        assert!(opts.include_hashtags);
        assert!(!opts.include_emojis);
    }

    #[test]
    fn rewrite_options_reject_unknown_tone() {
        let parsed = serde_json::from_value::<RewriteOptions>(serde_json::json!({"tone": "angry"}));
        assert!(parsed.is_err());
    }
}
