pub mod http;
pub mod prompt;
pub mod traits;

pub use http::HttpGenerator;
pub use prompt::ListingPrompt;
pub use traits::DescriptionGenerator;

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use crate::models::listing::ListingDraft;

/// Shown by the UI when generation is unavailable
pub const GENERATION_APOLOGY: &str =
    "La génération automatique est indisponible pour le moment.";

/// Generate a description for the draft, keeping the draft's own text when
/// the provider fails. Provider errors are never fatal.
pub async fn describe_or_keep(generator: &dyn DescriptionGenerator, draft: &ListingDraft) -> String {
    match generator.generate(&ListingPrompt::from_draft(draft)).await {
        Ok(text) => text,
        Err(e) => {
            warn!(
                "Description generation failed via {}: {e:#}; keeping the draft text",
                generator.provider_name()
            );
            draft.description.clone()
        }
    }
}

/// Provider returning a fixed text, for tests and offline demos
pub struct CannedGenerator {
    text: String,
}

impl CannedGenerator {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl DescriptionGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &ListingPrompt) -> Result<String> {
        Ok(self.text.clone())
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }
}
