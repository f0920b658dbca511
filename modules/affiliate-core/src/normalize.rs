//! Field mappings from each platform's wire payload to [`SocialPost`].
//!
//! All three share the same defaults: missing text becomes `""`, a missing
//! author becomes the platform's generic label, missing or negative counters
//! become 0.

use affiliate_common::{Platform, SocialPost};
use chrono::{DateTime, SecondsFormat};
use social_client::{FacebookPost, InstagramMedia, TikTokVideo};

fn count(value: Option<i64>) -> u64 {
    value.unwrap_or(0).max(0) as u64
}

/// Treat empty strings like absent values, the way the upstream APIs are read.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn author_or_default(author: Option<String>, platform: Platform) -> String {
    present(author).unwrap_or_else(|| platform.default_author().to_string())
}

/// Unix seconds as an RFC 3339 UTC timestamp with millisecond precision.
pub fn unix_to_iso(seconds: i64) -> Option<String> {
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn from_facebook(post: FacebookPost) -> SocialPost {
    let likes = count(post.like_count());
    let comments = count(post.comment_count());
    let shares = count(post.share_count());

    SocialPost {
        id: post.id,
        platform: Platform::Facebook,
        content: post.message.unwrap_or_default(),
        image_url: present(post.full_picture),
        video_url: None,
        author: author_or_default(post.from.and_then(|f| f.name), Platform::Facebook),
        likes,
        comments,
        shares,
        created_at: post.created_time.unwrap_or_default(),
        url: post.permalink_url.unwrap_or_default(),
        category: None,
    }
}

pub fn from_instagram(media: InstagramMedia) -> SocialPost {
    let (image_url, video_url) = if media.is_video() {
        (present(media.thumbnail_url), present(media.media_url))
    } else {
        (present(media.media_url), None)
    };

    SocialPost {
        id: media.id,
        platform: Platform::Instagram,
        content: media.caption.unwrap_or_default(),
        image_url,
        video_url,
        author: author_or_default(media.username, Platform::Instagram),
        likes: count(media.like_count),
        comments: count(media.comments_count),
        shares: 0,
        created_at: media.timestamp.unwrap_or_default(),
        url: media.permalink.unwrap_or_default(),
        category: None,
    }
}

pub fn from_tiktok(video: TikTokVideo) -> SocialPost {
    let content = present(video.video_description)
        .or_else(|| present(video.title))
        .unwrap_or_default();

    SocialPost {
        id: video.id,
        platform: Platform::TikTok,
        content,
        image_url: present(video.cover_image_url),
        video_url: present(video.share_url.clone()),
        author: Platform::TikTok.default_author().to_string(),
        likes: count(video.like_count),
        comments: count(video.comment_count),
        shares: count(video.share_count),
        created_at: video.create_time.and_then(unix_to_iso).unwrap_or_default(),
        url: video.share_url.unwrap_or_default(),
        category: None,
    }
}
