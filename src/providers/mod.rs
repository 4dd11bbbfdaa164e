mod anthropic;
mod factory;
mod fallback;
mod google;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use fallback::FallbackProvider;
pub use google::GoogleProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::{build_generation_input, RECIPE_GENERATION_PROMPT};

use async_trait::async_trait;
use std::error::Error;

/// Unified trait for all generation providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "google", "openai")
    fn provider_name(&self) -> &str;

    /// Turn a video transcript into sectioned recipe text
    async fn generate(&self, transcript: &str) -> Result<String, Box<dyn Error + Send + Sync>>;
}
