use async_trait::async_trait;

use crate::error::Result;

// =============================================================================
// TextCompleter Trait
// =============================================================================

/// A service that turns one prompt into one completion.
///
/// Each call is independent; implementations keep no conversation state.
#[async_trait]
pub trait TextCompleter: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}
