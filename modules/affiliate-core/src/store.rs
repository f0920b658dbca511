use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use affiliate_common::{
    AffiliateError, AffiliateProduct, Post, PostDraft, ProductDraft, Result, SourcePlatform,
};

const PLACEHOLDER_POST_IMAGE: &str = "https://via.placeholder.com/800";
const PLACEHOLDER_PRODUCT_IMAGE: &str = "https://via.placeholder.com/400";

/// In-memory catalogue of blog posts. Owned by whoever serves the pages and
/// passed in explicitly; nothing survives a restart.
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
}

impl PostStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// A store seeded with the sample posts.
    pub fn with_samples() -> Self {
        Self::new(sample_posts())
    }

    /// All posts, newest `date` first. Posts sharing a date keep insertion order.
    pub async fn all(&self) -> Vec<Post> {
        let mut posts = self.posts.read().await.clone();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    pub async fn get(&self, id: &str) -> Option<Post> {
        self.posts.read().await.iter().find(|p| p.id == id).cloned()
    }

    /// Validate a draft and add it, dated today.
    pub async fn add(&self, draft: PostDraft) -> Result<Post> {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let post = accept_draft(draft, &today)?;
        self.posts.write().await.push(post.clone());
        info!(id = %post.id, title = %post.title, "Added post");
        Ok(post)
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AffiliateError::Validation(format!("{field} is required")))
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Turn a draft into a post, or explain which field is missing.
pub fn accept_draft(draft: PostDraft, date: &str) -> Result<Post> {
    let title = required(draft.title, "title")?;
    let excerpt = required(draft.excerpt, "excerpt")?;
    let content = required(draft.content, "content")?;

    let affiliate_products = draft
        .affiliate_products
        .into_iter()
        .map(accept_product)
        .collect::<Result<Vec<_>>>()?;

    Ok(Post {
        id: format!("post-{}", Uuid::new_v4().simple()),
        title,
        excerpt,
        content,
        image: optional(draft.image).unwrap_or_else(|| PLACEHOLDER_POST_IMAGE.to_string()),
        date: date.to_string(),
        social_platform: draft.social_platform.unwrap_or_default(),
        original_url: optional(draft.original_url),
        original_post_text: optional(draft.original_post_text),
        affiliate_products,
    })
}

fn accept_product(draft: ProductDraft) -> Result<AffiliateProduct> {
    Ok(AffiliateProduct {
        id: format!("prod-{}", Uuid::new_v4().simple()),
        name: required(draft.name, "product name")?,
        description: draft.description.unwrap_or_default(),
        price: draft.price.unwrap_or(0.0),
        affiliate_url: required(draft.affiliate_url, "product affiliateUrl")?,
        image: optional(draft.image).unwrap_or_else(|| PLACEHOLDER_PRODUCT_IMAGE.to_string()),
    })
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    title: &str,
    excerpt: &str,
    content: &str,
    image: &str,
    date: &str,
    social_platform: SourcePlatform,
    original_url: &str,
    original_post_text: &str,
    product: AffiliateProduct,
) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        image: image.to_string(),
        date: date.to_string(),
        social_platform,
        original_url: Some(original_url.to_string()),
        original_post_text: Some(original_post_text.to_string()),
        affiliate_products: vec![product],
    }
}

fn product(id: &str, name: &str, description: &str, price: f64, url: &str, image: &str) -> AffiliateProduct {
    AffiliateProduct {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        affiliate_url: url.to_string(),
        image: image.to_string(),
    }
}

pub fn sample_posts() -> Vec<Post> {
    vec![
        sample(
            "1",
            "The Viral Kitchen Gadget Everyone is Talking About",
            "This amazing multi-functional kitchen tool has taken Instagram by storm, and for good reason!",
            "I recently came across this incredible kitchen gadget on Instagram, and I just had to share it with you all. The reactions were overwhelming, with thousands of people asking where to get it.

After using it for two weeks, I can confidently say this is a game-changer for anyone who loves cooking but hates the cleanup. It combines multiple tools into one sleek design, saving both space and time.

The build quality is exceptional, with premium stainless steel construction that feels solid and durable. What impressed me most was how intuitive it is to use - no complicated instructions needed.

Whether you're a professional chef or a home cooking enthusiast, this tool will make your kitchen experience so much better. The price point is incredibly reasonable for the value you get.",
            "https://images.unsplash.com/photo-1556911261-6bd341186b2f?w=800&q=80",
            "2026-01-18",
            SourcePlatform::Instagram,
            "https://instagram.com/example",
            "Just found the BEST kitchen gadget ever! 🔥 Makes cooking and cleanup so easy. Link in bio! #kitchenhacks #cooking",
            product(
                "prod-1",
                "MultiChef Pro Kitchen Tool",
                "5-in-1 kitchen gadget: peeler, grater, slicer, julienne, and zester",
                29.99,
                "https://amazon.com/example-product-1",
                "https://images.unsplash.com/photo-1556911261-6bd341186b2f?w=400&q=80",
            ),
        ),
        sample(
            "2",
            "This Portable Blender Changed My Morning Routine",
            "Seen all over TikTok, this USB rechargeable blender is perfect for smoothies on the go!",
            "When I first saw this portable blender on TikTok, I was skeptical. Could something so small really work? Spoiler alert: it absolutely does!

This has become an essential part of my morning routine. I can make fresh smoothies in under 60 seconds, and the best part is that I can take it anywhere - to work, the gym, or even on road trips.

The battery life is impressive, lasting for about 15-20 blends on a single charge. It's powerful enough to crush ice and frozen fruits, which many portable blenders struggle with.

Cleaning is a breeze too - just add water and a drop of soap, blend for a few seconds, and you're done. No more dealing with bulky traditional blenders taking up counter space.

If you're someone who's always on the go but doesn't want to sacrifice healthy eating, this is an absolute must-have.",
            "https://images.unsplash.com/photo-1570831739435-6601aa3fa4fb?w=800&q=80",
            "2026-01-15",
            SourcePlatform::TikTok,
            "https://tiktok.com/example",
            "Making smoothies has never been easier! ✨ This portable blender is a game changer #smoothie #healthy #portableblender",
            product(
                "prod-2",
                "BlendJet 2 Portable Blender",
                "USB-C rechargeable, waterproof, perfect for smoothies and shakes",
                49.95,
                "https://amazon.com/example-product-2",
                "https://images.unsplash.com/photo-1570831739435-6601aa3fa4fb?w=400&q=80",
            ),
        ),
        sample(
            "3",
            "The Smart Water Bottle That Tracks Your Hydration",
            "This tech-enabled water bottle from a viral Facebook post helps you stay hydrated with LED reminders!",
            "I'll admit, I'm terrible at drinking enough water throughout the day. That all changed when I discovered this smart water bottle that was going viral on Facebook.

The bottle connects to your phone via Bluetooth and tracks your water intake throughout the day. It even glows to remind you when it's time to drink more water - a feature that's surprisingly effective!

What makes this bottle special is the temperature display on the lid. You always know if your drink is at the perfect temperature. It keeps drinks cold for 24 hours and hot for 12 hours.

The app integration is well-designed and not intrusive. You can set personalized hydration goals based on your weight, activity level, and climate. The battery lasts for weeks on a single charge.

Since using this bottle, I've noticed significant improvements in my energy levels and overall well-being. It's amazing what proper hydration can do!",
            "https://images.unsplash.com/photo-1602143407151-7111542de6e8?w=800&q=80",
            "2026-01-12",
            SourcePlatform::Facebook,
            "https://facebook.com/example",
            "Finally staying hydrated thanks to this smart water bottle! 💧 The LED reminders are a game changer. Highly recommend!",
            product(
                "prod-3",
                "HidrateSpark PRO Smart Bottle",
                "LED glow reminders, tracks water intake, 24oz stainless steel",
                79.99,
                "https://amazon.com/example-product-3",
                "https://images.unsplash.com/photo-1602143407151-7111542de6e8?w=400&q=80",
            ),
        ),
    ]
}
