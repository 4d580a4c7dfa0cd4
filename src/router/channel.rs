//! Collaborators the router talks to.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::CompletionRequest;

/// Where replies to the message being handled are delivered.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Sends `text` as a reply to the original message.
    async fn reply(&self, text: &str) -> Result<()>;

    /// Shows a typing indicator in the message's channel.
    async fn start_typing(&self) -> Result<()>;
}

/// Text generation backend.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Generates a reply for `request`. An empty string is a valid answer.
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}
