//! Fixed demo posts substituted when a platform cannot be fetched live.

use affiliate_common::{Platform, SocialPost};
use chrono::{Duration, SecondsFormat, Utc};

struct MockPost {
    id: &'static str,
    content: &'static str,
    image_url: &'static str,
    author: &'static str,
    likes: u64,
    comments: u64,
    shares: u64,
    /// Age of the post relative to the moment the list is built.
    age_ms: i64,
    url: &'static str,
    category: &'static str,
}

const FACEBOOK_POSTS: &[MockPost] = &[
    MockPost {
        id: "fb_1",
        content: "Just discovered this amazing productivity tool! 🚀 It has completely transformed how I work. The AI features are mind-blowing and save me hours every day. Highly recommend checking it out!",
        image_url: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800",
        author: "Tech Enthusiast",
        likes: 1543,
        comments: 287,
        shares: 156,
        age_ms: 86_400_000,
        url: "https://facebook.com/post/1",
        category: "Technology",
    },
    MockPost {
        id: "fb_2",
        content: "This skincare routine changed my life! ✨ After just 2 weeks, my skin is glowing. The secret? Consistency and the right products. Swipe to see my before and after!",
        image_url: "https://images.unsplash.com/photo-1556228578-0d85b1a4d571?w=800",
        author: "Beauty Guru",
        likes: 2341,
        comments: 412,
        shares: 234,
        age_ms: 172_800_000,
        url: "https://facebook.com/post/2",
        category: "Beauty",
    },
    MockPost {
        id: "fb_3",
        content: "\"For God so loved the world that he gave his one and only Son, that whoever believes in him shall not perish but have eternal life.\" John 3:16 ✝️ This verse transformed my life. Share if it blessed you too! #Faith #ChristianLiving #BlessedBeyondMeasure",
        image_url: "https://images.unsplash.com/photo-1507692049790-de58290a4334?w=800",
        author: "Faith & Hope",
        likes: 3821,
        comments: 542,
        shares: 687,
        age_ms: 259_200_000,
        url: "https://facebook.com/post/3",
        category: "Christian",
    },
    MockPost {
        id: "fb_4",
        content: "Started my morning with prayer and everything changed. 🙏 When we seek God first, everything else falls into place. What's your morning routine look like? #MorningPrayer #FaithJourney #GodsLove",
        image_url: "https://images.unsplash.com/photo-1490730141103-6cac27aaab94?w=800",
        author: "Grace Community",
        likes: 2198,
        comments: 321,
        shares: 445,
        age_ms: 432_000_000,
        url: "https://facebook.com/post/4",
        category: "Christian",
    },
];

const INSTAGRAM_POSTS: &[MockPost] = &[
    MockPost {
        id: "ig_1",
        content: "Morning coffee setup ☕️ Working from home never looked so good! Link in bio for all the details on my desk setup. #WFH #ProductivityGoals",
        image_url: "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?w=800",
        author: "@lifestyle_creator",
        likes: 3287,
        comments: 156,
        shares: 0,
        age_ms: 43_200_000,
        url: "https://instagram.com/p/1",
        category: "Lifestyle",
    },
    MockPost {
        id: "ig_2",
        content: "Game changer alert! 🎮 This ergonomic chair has saved my back during long gaming sessions. Worth every penny! #GamerLife #Setup",
        image_url: "https://images.unsplash.com/photo-1593642632823-8f785ba67e45?w=800",
        author: "@gamer_pro",
        likes: 4521,
        comments: 298,
        shares: 0,
        age_ms: 259_200_000,
        url: "https://instagram.com/p/2",
        category: "Gaming",
    },
    MockPost {
        id: "ig_3",
        content: "Be still and know that I am God ✨🙏\n\nPsalm 46:10\n\nIn the chaos of life, find peace in His presence. Taking time to be still has changed everything for me.\n\n#ChristianLife #FaithOverFear #PeaceInChrist #BibleVerse #SpiritualGrowth",
        image_url: "https://images.unsplash.com/photo-1465101162946-4377e57745c3?w=800",
        author: "@faithful_journey",
        likes: 5632,
        comments: 423,
        shares: 0,
        age_ms: 518_400_000,
        url: "https://instagram.com/p/3",
        category: "Christian",
    },
    MockPost {
        id: "ig_4",
        content: "Sunday worship hit different today 🎶✝️ There's something powerful about praising God with your community. Who else feels closest to God during worship? Drop a 🙌 below!\n\n#SundayService #WorshipMusic #ChurchCommunity #PraiseAndWorship",
        image_url: "https://images.unsplash.com/photo-1438232992991-995b7058bbb3?w=800",
        author: "@worshipper",
        likes: 4187,
        comments: 289,
        shares: 0,
        age_ms: 604_800_000,
        url: "https://instagram.com/p/4",
        category: "Christian",
    },
];

const TIKTOK_POSTS: &[MockPost] = &[
    MockPost {
        id: "tt_1",
        content: "POV: You finally found the perfect noise-canceling headphones 🎧 Link in bio! #TechTok #ProductReview",
        image_url: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=800",
        author: "@tech_reviewer",
        likes: 15300,
        comments: 543,
        shares: 892,
        age_ms: 129_600_000,
        url: "https://tiktok.com/@user/video/1",
        category: "Technology",
    },
    MockPost {
        id: "tt_2",
        content: "This $20 Amazon find is a MUST HAVE 😱 I wish I found this sooner! #AmazonFinds #LifeHack",
        image_url: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=800",
        author: "@deals_hunter",
        likes: 23400,
        comments: 1203,
        shares: 1567,
        age_ms: 345_600_000,
        url: "https://tiktok.com/@user/video/2",
        category: "Shopping",
    },
    MockPost {
        id: "tt_3",
        content: "POV: You remember that God's got you no matter what 🙏✝️ Watch till the end for the verse that changed my life! #ChristianTikTok #FaithTok #GodsGotYou #BibleVerses",
        image_url: "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?w=800",
        author: "@faith_daily",
        likes: 18700,
        comments: 892,
        shares: 1245,
        age_ms: 691_200_000,
        url: "https://tiktok.com/@user/video/3",
        category: "Christian",
    },
    MockPost {
        id: "tt_4",
        content: "The moment I gave my worries to God everything shifted 🕊️ Stop trying to control everything and just trust Him! Comment AMEN if you needed this! #ChristianContent #TrustGod #FaithJourney",
        image_url: "https://images.unsplash.com/photo-1501472312651-726afe119ff1?w=800",
        author: "@jesus_follower",
        likes: 27800,
        comments: 1456,
        shares: 2103,
        age_ms: 777_600_000,
        url: "https://tiktok.com/@user/video/4",
        category: "Christian",
    },
];

/// The fixed mock list for `platform`, timestamped relative to now.
pub fn mock_posts(platform: Platform) -> Vec<SocialPost> {
    let table = match platform {
        Platform::Facebook => FACEBOOK_POSTS,
        Platform::Instagram => INSTAGRAM_POSTS,
        Platform::TikTok => TIKTOK_POSTS,
    };
    let now = Utc::now();

    table
        .iter()
        .map(|m| SocialPost {
            id: m.id.to_string(),
            platform,
            content: m.content.to_string(),
            image_url: Some(m.image_url.to_string()),
            video_url: None,
            author: m.author.to_string(),
            likes: m.likes,
            comments: m.comments,
            shares: m.shares,
            created_at: (now - Duration::milliseconds(m.age_ms))
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            url: m.url.to_string(),
            category: Some(m.category.to_string()),
        })
        .collect()
}
