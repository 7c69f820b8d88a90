use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, info};

use crate::languages::TargetLanguage;
use crate::translate::{TranslationRequest, Translator};

pub const NO_TRANSLATION_MESSAGE: &str = "No translation produced. Please try again.";

/// Hint shown when no API key was found in `api_key_env`
pub fn missing_api_key_hint(api_key_env: &str) -> String {
    format!(
        "Set your OpenAI API key in the {} environment variable to run translations.",
        api_key_env
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormAction {
    #[default]
    Translate,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported form action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for FormAction {
    type Err = UnknownAction;

    /// Case-insensitive; a missing action means translate
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let action = s.trim();
        if action.is_empty() || action.eq_ignore_ascii_case("translate") {
            Ok(FormAction::Translate)
        } else if action.eq_ignore_ascii_case("clear") {
            Ok(FormAction::Clear)
        } else {
            Err(UnknownAction(s.to_string()))
        }
    }
}

/// Fields posted by the page; kept as plain strings so that odd values
/// become warnings instead of extractor rejections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub action: String,
}

/// Result of a translate action as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Warning(String),
    Info(String),
    Translated(String),
    Error(String),
}

/// Everything the page needs for one render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub language: TargetLanguage,
    pub text: String,
    pub hint: Option<String>,
    pub outcome: Option<Outcome>,
}

#[derive(Clone)]
pub struct FormController {
    translator: Translator,
    api_key_configured: bool,
    api_key_env: String,
}

impl FormController {
    pub fn new(
        translator: Translator,
        api_key_configured: bool,
        api_key_env: impl Into<String>,
    ) -> Self {
        Self {
            translator,
            api_key_configured,
            api_key_env: api_key_env.into(),
        }
    }

    /// Page shown when the posted body could not be read at all
    pub fn rejected(message: &str) -> FormView {
        FormView {
            outcome: Some(Outcome::Warning(message.to_string())),
            ..FormView::default()
        }
    }

    /// Fresh form with `language` preselected
    pub fn blank(language: TargetLanguage) -> FormView {
        FormView {
            language,
            ..FormView::default()
        }
    }

    /// Dispatch a posted form; never fails, every problem becomes an outcome
    pub async fn submit(&self, submission: FormSubmission) -> FormView {
        let language = match submission.language.parse::<TargetLanguage>() {
            Ok(language) => language,
            Err(err) => {
                debug!("Rejected form language: {}", err);
                return FormView {
                    text: submission.text,
                    outcome: Some(Outcome::Warning(err.to_string())),
                    ..FormView::default()
                };
            }
        };

        match submission.action.parse::<FormAction>() {
            Ok(FormAction::Clear) => Self::clear(language),
            Ok(FormAction::Translate) => self.translate(language, submission.text).await,
            Err(err) => {
                debug!("Rejected form action: {}", err);
                FormView {
                    language,
                    text: submission.text,
                    outcome: Some(Outcome::Warning(err.to_string())),
                    hint: None,
                }
            }
        }
    }

    /// Resets input and output; the language selection is kept
    pub fn clear(language: TargetLanguage) -> FormView {
        Self::blank(language)
    }

    pub async fn translate(&self, language: TargetLanguage, text: String) -> FormView {
        let mut view = FormView {
            language,
            ..FormView::default()
        };

        if let Err(err) = TranslationRequest::new(&text, language) {
            view.text = text;
            view.outcome = Some(Outcome::Warning(err.to_string()));
            return view;
        }

        if !self.api_key_configured {
            view.hint = Some(missing_api_key_hint(&self.api_key_env));
        }

        info!("Translating form input into {}", language);
        let outcome = match self.translator.translate(&text, language).await {
            Ok(translated) if translated.is_empty() => Outcome::Info(NO_TRANSLATION_MESSAGE.to_string()),
            Ok(translated) => Outcome::Translated(translated),
            Err(err) => Outcome::Error(format!("Translation failed: {}", err)),
        };

        view.text = text;
        view.outcome = Some(outcome);
        view
    }
}
