use std::cmp::Reverse;
use std::sync::Arc;

use tracing::info;

use affiliate_common::{Config, Platform, SocialPost};

use crate::sources::{fetch_or_mock, FacebookSource, InstagramSource, PostSource, TikTokSource};

/// Stable sort, highest engagement first. Posts with equal engagement keep
/// their input order.
pub fn rank_by_engagement(mut posts: Vec<SocialPost>) -> Vec<SocialPost> {
    posts.sort_by_key(|p| Reverse(p.engagement()));
    posts
}

pub fn filter_platform(posts: Vec<SocialPost>, platform: Platform) -> Vec<SocialPost> {
    posts.into_iter().filter(|p| p.platform == platform).collect()
}

/// Ranked feed across Facebook, Instagram and TikTok.
#[derive(Clone)]
pub struct SocialFeed {
    facebook: Arc<dyn PostSource>,
    instagram: Arc<dyn PostSource>,
    tiktok: Arc<dyn PostSource>,
}

impl SocialFeed {
    pub fn new(
        facebook: Arc<dyn PostSource>,
        instagram: Arc<dyn PostSource>,
        tiktok: Arc<dyn PostSource>,
    ) -> Self {
        Self {
            facebook,
            instagram,
            tiktok,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(FacebookSource::from_config(config)),
            Arc::new(InstagramSource::from_config(config)),
            Arc::new(TikTokSource::from_config(config)),
        )
    }

    /// Fetch all three platforms concurrently, concatenate in platform order,
    /// rank by engagement and optionally keep a single platform.
    ///
    /// A platform that fails contributes its mock list instead; the caller
    /// cannot tell the difference.
    pub async fn popular_posts(&self, filter: Option<Platform>) -> Vec<SocialPost> {
        let (facebook, instagram, tiktok) = tokio::join!(
            fetch_or_mock(self.facebook.as_ref()),
            fetch_or_mock(self.instagram.as_ref()),
            fetch_or_mock(self.tiktok.as_ref()),
        );

        let mut all = facebook;
        all.extend(instagram);
        all.extend(tiktok);

        let ranked = rank_by_engagement(all);
        let posts = match filter {
            Some(platform) => filter_platform(ranked, platform),
            None => ranked,
        };

        info!(count = posts.len(), filter = ?filter, "Aggregated popular posts");
        posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, platform: Platform, likes: u64, comments: u64, shares: u64) -> SocialPost {
        SocialPost {
            id: id.to_string(),
            platform,
            content: String::new(),
            image_url: None,
            video_url: None,
            author: "a".into(),
            likes,
            comments,
            shares,
            created_at: String::new(),
            url: String::new(),
            category: None,
        }
    }

    fn ids(posts: &[SocialPost]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn ranks_descending_by_total_engagement() {
        let ranked = rank_by_engagement(vec![
            post("fb_1", Platform::Facebook, 1543, 287, 156),
            post("ig_1", Platform::Instagram, 3287, 156, 0),
            post("tt_x", Platform::TikTok, 10, 0, 0),
        ]);
        assert_eq!(ids(&ranked), vec!["ig_1", "fb_1", "tt_x"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank_by_engagement(vec![
            post("a", Platform::Facebook, 5, 0, 0),
            post("b", Platform::Instagram, 0, 5, 0),
            post("top", Platform::TikTok, 100, 0, 0),
            post("c", Platform::TikTok, 0, 0, 5),
        ]);
        assert_eq!(ids(&ranked), vec!["top", "a", "b", "c"]);
    }

    #[test]
    fn empty_input_ranks_to_empty() {
        assert!(rank_by_engagement(Vec::new()).is_empty());
    }

    #[test]
    fn filter_keeps_only_matching_platform() {
        let filtered = filter_platform(
            vec![
                post("a", Platform::Facebook, 1, 0, 0),
                post("b", Platform::TikTok, 1, 0, 0),
                post("c", Platform::Facebook, 1, 0, 0),
            ],
            Platform::Facebook,
        );
        assert_eq!(ids(&filtered), vec!["a", "c"]);
    }
}
