use crate::error::Result;
use async_trait::async_trait;

/// A remote generative-text service reduced to a single prompt-in, text-out call.
#[async_trait]
pub trait TextModel: Send + Sync {
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String>;
}
