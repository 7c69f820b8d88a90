use serde::{Deserialize, Serialize};

/// Configuration for the OpenAI-compatible completion endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenAICompatibleConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    pub organization_id: Option<String>,

    pub project_id: Option<String>,

    /// Request timeout; the transport default applies when unset
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for OpenAICompatibleConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            api_key_env: default_api_key_env(),
            organization_id: None,
            project_id: None,
            timeout_secs: None,
        }
    }
}

impl OpenAICompatibleConfig {
    /// Reads the API key from the configured variable; blank values count as unset
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}
