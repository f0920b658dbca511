//! Rewriter behaviour against scripted completers.

use std::sync::Arc;

use affiliate_common::{AffiliateError, Platform, RewriteOptions, Tone};
use affiliate_core::fixtures::ScriptedCompleter;
use affiliate_core::{Rewriter, DEFAULT_VARIATION_COUNT};

fn rewriter(completer: &Arc<ScriptedCompleter>) -> Rewriter {
    Rewriter::new(completer.clone())
}

#[tokio::test]
async fn rewrite_returns_completion_text() {
    let completer = Arc::new(ScriptedCompleter::new(vec![Some("Shiny new copy ✨")]));
    let text = rewriter(&completer)
        .rewrite("old copy", &RewriteOptions::default())
        .await
        .unwrap();

    assert_eq!(text, "Shiny new copy ✨");
    let prompts = completer.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("\"old copy\""));
}

#[tokio::test]
async fn rewrite_failure_has_generic_message() {
    let completer = Arc::new(ScriptedCompleter::always_failing());
    let err = rewriter(&completer)
        .rewrite("old copy", &RewriteOptions::default())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AffiliateError::UpstreamRequestFailed("Failed to rewrite content. Please try again.".into())
    );
    assert_eq!(err.to_string(), "Failed to rewrite content. Please try again.");
}

#[tokio::test]
async fn variations_skip_failed_attempts_in_order() {
    let completer = Arc::new(ScriptedCompleter::new(vec![
        Some("first"),
        None,
        Some("third"),
    ]));
    let variations = rewriter(&completer)
        .generate_variations("copy", DEFAULT_VARIATION_COUNT, &RewriteOptions::default())
        .await;

    assert_eq!(variations, vec!["first", "third"]);
    assert_eq!(completer.prompts().len(), DEFAULT_VARIATION_COUNT);
}

#[tokio::test]
async fn variations_all_failing_is_empty_not_error() {
    let completer = Arc::new(ScriptedCompleter::always_failing());
    let variations = rewriter(&completer)
        .generate_variations("copy", 2, &RewriteOptions::default())
        .await;

    assert!(variations.is_empty());
    assert_eq!(completer.prompts().len(), 2);
}

#[tokio::test]
async fn variations_reuse_identical_options() {
    let completer = Arc::new(ScriptedCompleter::new(vec![Some("a"), Some("b")]));
    let options = RewriteOptions {
        tone: Tone::Informative,
        ..RewriteOptions::default()
    };
    rewriter(&completer)
        .generate_variations("copy", 2, &options)
        .await;

    let prompts = completer.prompts();
    assert_eq!(prompts[0], prompts[1]);
    assert!(prompts[0].contains("- Tone: informative"));
}

#[tokio::test]
async fn tiktok_optimization_is_enthusiastic() {
    let completer = Arc::new(ScriptedCompleter::new(vec![Some("tt"), Some("ig")]));
    let r = rewriter(&completer);

    r.optimize_for_platform("copy", Platform::TikTok).await.unwrap();
    r.optimize_for_platform("copy", Platform::Instagram).await.unwrap();

    let prompts = completer.prompts();
    assert!(prompts[0].contains("- Tone: enthusiastic"));
    assert!(prompts[0].contains("TikTok-style"));
    assert!(prompts[0].contains("- Include relevant hashtags (3-5 hashtags)"));
    assert!(prompts[1].contains("- Tone: casual"));
    assert!(prompts[1].contains("Instagram-friendly"));
    assert!(prompts[1].contains("- Length: Keep it between 100-200 words"));
}
