use std::sync::Arc;

use crate::config::Config;
use crate::form::FormController;
use crate::llm::{OpenAICompatibleLLM, StatelessLLMInterface};
use crate::translate::Translator;

/// Process-wide, read-only state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Translator,
    pub api_key_configured: bool,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let api_key = config.llm.api_key();
        let api_key_configured = api_key.is_some();
        if !api_key_configured {
            tracing::warn!(
                "{} is not set; translation requests will be rejected by the endpoint",
                config.llm.api_key_env
            );
        }

        let llm: Arc<dyn StatelessLLMInterface> =
            Arc::new(OpenAICompatibleLLM::new(&config.llm, api_key)?);

        Ok(Self::with_llm(config, llm, api_key_configured))
    }

    pub fn with_llm(
        config: Config,
        llm: Arc<dyn StatelessLLMInterface>,
        api_key_configured: bool,
    ) -> Self {
        Self {
            config: Arc::new(config),
            translator: Translator::new(llm),
            api_key_configured,
        }
    }

    pub fn form_controller(&self) -> FormController {
        FormController::new(
            self.translator.clone(),
            self.api_key_configured,
            self.config.llm.api_key_env.as_str(),
        )
    }
}
