use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A role-tagged chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Interface for a stateless language model
/// Stateless means the LLM doesn't store memory, system prompts, or user messages
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Send one chat completion request.
    /// Returns the content of the first choice, empty when the model produced none.
    async fn chat_completion(
        &self,
        messages: Vec<Message>,
        system: Option<&str>,
    ) -> anyhow::Result<String>;
}
