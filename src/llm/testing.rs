use std::sync::Mutex;

use async_trait::async_trait;

use super::stateless_llm_interface::{Message, StatelessLLMInterface};

/// A call captured by [`RecordingLLM`]
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub messages: Vec<Message>,
    pub system: Option<String>,
}

/// Fake model that records every call and answers with a canned reply
pub struct RecordingLLM {
    reply: Result<String, String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingLLM {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatelessLLMInterface for RecordingLLM {
    async fn chat_completion(
        &self,
        messages: Vec<Message>,
        system: Option<&str>,
    ) -> anyhow::Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            messages,
            system: system.map(|s| s.to_string()),
        });
        self.reply.clone().map_err(anyhow::Error::msg)
    }
}
