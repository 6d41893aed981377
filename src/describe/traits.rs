use anyhow::Result;
use async_trait::async_trait;

use super::prompt::ListingPrompt;

/// Common trait for description providers.
/// This allows swapping the external text service for a canned one in tests.
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    /// Generate listing prose from the prompt
    async fn generate(&self, prompt: &ListingPrompt) -> Result<String>;

    /// Get the name of the provider
    fn provider_name(&self) -> &'static str;
}
