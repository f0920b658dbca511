use std::sync::Arc;

use tracing::{error, info};

use affiliate_common::{
    AffiliateError, Config, Platform, Result, RewriteOptions, StylePlatform, Tone,
};
use ai_client::{Claude, TextCompleter};

/// Variations produced when a caller asks for several without a count.
pub const DEFAULT_VARIATION_COUNT: usize = 3;

const REWRITE_FAILED: &str = "Failed to rewrite content. Please try again.";

/// The rewrite prompt for `content` under `options`.
pub fn build_prompt(content: &str, options: &RewriteOptions) -> String {
    let hashtags = if options.include_hashtags {
        "Include relevant hashtags (3-5 hashtags)"
    } else {
        "Do not include hashtags"
    };
    let emojis = if options.include_emojis {
        "Use emojis strategically to enhance the message"
    } else {
        "Avoid using emojis"
    };

    format!(
        "You are an expert social media content writer. Your task is to rewrite the following social media post to make it more engaging and compelling while maintaining the core message.

Original post:
\"{content}\"

Guidelines:
- Tone: {tone}
- Length: {length}
- Platform: {platform}
- {hashtags}
- {emojis}
- Make it authentic and relatable
- Focus on value and engagement
- Keep the main message and intent intact
- Make it actionable if appropriate

Provide only the rewritten post without any explanations or meta-commentary.",
        tone = options.tone.as_str(),
        length = options.length.guidance(),
        platform = options.platform.guidance(),
    )
}

/// Rewrites post text through a generative-text service.
#[derive(Clone)]
pub struct Rewriter {
    completer: Arc<dyn TextCompleter>,
}

impl Rewriter {
    pub fn new(completer: Arc<dyn TextCompleter>) -> Self {
        Self { completer }
    }

    /// `None` when no Anthropic key is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.anthropic_api_key.as_deref()?;
        let claude = Claude::new(api_key, &config.anthropic_model);
        Some(Self::new(Arc::new(claude)))
    }

    /// One rewrite. Every failure is flattened to a single generic message.
    pub async fn rewrite(&self, content: &str, options: &RewriteOptions) -> Result<String> {
        let prompt = build_prompt(content, options);
        match self.completer.complete(&prompt).await {
            Ok(text) => Ok(text),
            Err(e) => {
                error!(error = %e, "Error rewriting content");
                Err(AffiliateError::UpstreamRequestFailed(REWRITE_FAILED.to_string()))
            }
        }
    }

    /// `count` independent rewrites, run one after another. Failed attempts
    /// are skipped, so fewer than `count` results is a normal outcome.
    pub async fn generate_variations(
        &self,
        content: &str,
        count: usize,
        options: &RewriteOptions,
    ) -> Vec<String> {
        let mut variations = Vec::with_capacity(count);
        for attempt in 1..=count {
            match self.rewrite(content, options).await {
                Ok(text) => variations.push(text),
                Err(e) => error!(attempt, error = %e, "Error generating variation"),
            }
        }
        info!(requested = count, produced = variations.len(), "Generated variations");
        variations
    }

    /// Rewrite with the house style for a specific platform.
    pub async fn optimize_for_platform(&self, content: &str, platform: Platform) -> Result<String> {
        let options = RewriteOptions {
            tone: if platform == Platform::TikTok {
                Tone::Enthusiastic
            } else {
                Tone::Casual
            },
            platform: StylePlatform::from(platform),
            include_hashtags: true,
            include_emojis: true,
            ..RewriteOptions::default()
        };
        self.rewrite(content, &options).await
    }
}

#[cfg(test)]
mod tests {
    use affiliate_common::Length;

    use super::*;

    #[test]
    fn prompt_embeds_content_and_default_directives() {
        let prompt = build_prompt("Best blender ever", &RewriteOptions::default());

        assert!(prompt.contains("Original post:\n\"Best blender ever\""));
        assert!(prompt.contains("- Tone: casual"));
        assert!(prompt.contains("- Length: Keep it between 100-200 words, engaging and informative."));
        assert!(prompt.contains("- Platform: Make it suitable for any social media platform."));
        assert!(prompt.contains("- Include relevant hashtags (3-5 hashtags)"));
        assert!(prompt.contains("- Use emojis strategically to enhance the message"));
        assert!(prompt.ends_with("without any explanations or meta-commentary."));
    }

    #[test]
    fn prompt_reflects_disabled_extras_and_platform() {
        let options = RewriteOptions {
            tone: Tone::Professional,
            length: Length::Short,
            platform: StylePlatform::Instagram,
            include_hashtags: false,
            include_emojis: false,
        };
        let prompt = build_prompt("x", &options);

        assert!(prompt.contains("- Tone: professional"));
        assert!(prompt.contains("- Length: Keep it under 100 words, concise and punchy."));
        assert!(prompt.contains("Instagram-friendly"));
        assert!(prompt.contains("- Do not include hashtags"));
        assert!(prompt.contains("- Avoid using emojis"));
    }

    #[test]
    fn from_config_requires_api_key() {
        assert!(Rewriter::from_config(&Config::default()).is_none());

        let config = Config {
            anthropic_api_key: Some("sk-ant".into()),
            anthropic_model: "claude-test".into(),
            ..Config::default()
        };
        assert!(Rewriter::from_config(&config).is_some());
    }
}
