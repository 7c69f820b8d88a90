use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::prompt::{build_translation_prompt, SYSTEM_PROMPT};
use crate::languages::TargetLanguage;
use crate::llm::{Message, StatelessLLMInterface};

/// Failure of a translation call; carries the underlying message unchanged
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("{0}")]
    Failed(String),
}

pub type TranslationResult = Result<String, TranslateError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Please enter some English text to translate.")]
pub struct EmptyInput;

/// A validated request: the source text is trimmed and non-blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    source_text: String,
    target_language: TargetLanguage,
}

impl TranslationRequest {
    pub fn new(text: &str, target_language: TargetLanguage) -> Result<Self, EmptyInput> {
        let source_text = text.trim();
        if source_text.is_empty() {
            return Err(EmptyInput);
        }
        Ok(Self {
            source_text: source_text.to_string(),
            target_language,
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn target_language(&self) -> TargetLanguage {
        self.target_language
    }
}

/// Turns English text into a target language through one completion call
#[derive(Clone)]
pub struct Translator {
    llm: Arc<dyn StatelessLLMInterface>,
}

impl Translator {
    pub fn new(llm: Arc<dyn StatelessLLMInterface>) -> Self {
        Self { llm }
    }

    /// Translate `text` into `target`.
    ///
    /// Blank input short-circuits to an empty success without touching the
    /// network. Otherwise exactly one completion request is sent and the
    /// trimmed content of its first choice is returned.
    pub async fn translate(&self, text: &str, target: TargetLanguage) -> TranslationResult {
        match TranslationRequest::new(text, target) {
            Ok(request) => self.execute(&request).await,
            Err(EmptyInput) => {
                debug!("Skipping translation of blank input");
                Ok(String::new())
            }
        }
    }

    async fn execute(&self, request: &TranslationRequest) -> TranslationResult {
        let span = info_span!(
            "translate",
            request_id = %Uuid::new_v4(),
            language = %request.target_language(),
            chars = request.source_text().chars().count(),
        );

        async move {
            let prompt = build_translation_prompt(request.source_text(), request.target_language());
            let result = self
                .llm
                .chat_completion(vec![Message::user(prompt)], Some(SYSTEM_PROMPT))
                .await;

            match result {
                Ok(content) => {
                    let translated = content.trim().to_string();
                    info!(output_chars = translated.chars().count(), "Translation completed");
                    Ok(translated)
                }
                Err(err) => {
                    warn!("Translation failed: {:#}", err);
                    Err(TranslateError::Failed(format!("{:#}", err)))
                }
            }
        }
        .instrument(span)
        .await
    }
}
