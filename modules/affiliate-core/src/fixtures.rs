//! Fixture implementations for integration testing.
//!
//! **Post sources:**
//! - `FixtureSource`: static posts for one platform
//! - `FailingSource`: always errors, so the feed falls back to mock posts
//!
//! **Completers:**
//! - `ScriptedCompleter`: replays canned replies in order and records prompts

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use affiliate_common::{AffiliateError, Platform, Result, SocialPost};
use ai_client::{AiError, TextCompleter};

use crate::sources::PostSource;

// --- FixtureSource ---

pub struct FixtureSource {
    pub platform: Platform,
    pub posts: Vec<SocialPost>,
}

impl FixtureSource {
    pub fn new(platform: Platform, posts: Vec<SocialPost>) -> Self {
        Self { platform, posts }
    }
}

#[async_trait]
impl PostSource for FixtureSource {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn fetch(&self) -> Result<Vec<SocialPost>> {
        Ok(self.posts.clone())
    }
}

// --- FailingSource ---

pub struct FailingSource {
    pub platform: Platform,
    pub error: AffiliateError,
}

impl FailingSource {
    pub fn new(platform: Platform, error: AffiliateError) -> Self {
        Self { platform, error }
    }

    /// A source that behaves as if the platform's keys were never set.
    pub fn unconfigured(platform: Platform) -> Self {
        Self::new(
            platform,
            AffiliateError::ConfigurationMissing(format!("{platform} not configured")),
        )
    }
}

#[async_trait]
impl PostSource for FailingSource {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn fetch(&self) -> Result<Vec<SocialPost>> {
        Err(self.error.clone())
    }
}

// --- ScriptedCompleter ---

/// Replays `replies` in order; `None` entries (and calls past the end) fail.
pub struct ScriptedCompleter {
    replies: Mutex<VecDeque<Option<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedCompleter {
    pub fn new(replies: Vec<Option<&str>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| r.map(String::from)).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn always_failing() -> Self {
        Self::new(Vec::new())
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TextCompleter for ScriptedCompleter {
    async fn complete(&self, prompt: &str) -> ai_client::Result<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        let reply = self
            .replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front())
            .flatten();
        reply.ok_or_else(|| AiError::Api {
            status: 529,
            message: "overloaded".to_string(),
        })
    }
}

/// A post with the given engagement split, for ranking tests.
pub fn post(id: &str, platform: Platform, likes: u64, comments: u64, shares: u64) -> SocialPost {
    SocialPost {
        id: id.to_string(),
        platform,
        content: format!("post {id}"),
        image_url: None,
        video_url: None,
        author: platform.default_author().to_string(),
        likes,
        comments,
        shares,
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        url: format!("https://example.com/{id}"),
        category: None,
    }
}
