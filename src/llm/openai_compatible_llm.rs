use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::stateless_llm_interface::{Message, StatelessLLMInterface};
use crate::config_manager::OpenAICompatibleConfig;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// OpenAI compatible LLM implementation over the `/chat/completions` endpoint
#[derive(Clone)]
pub struct OpenAICompatibleLLM {
    client: Client,
    model: String,
    base_url: String,
    api_key: Option<String>,
    organization_id: Option<String>,
    project_id: Option<String>,
    temperature: f32,
}

impl OpenAICompatibleLLM {
    pub fn new(config: &OpenAICompatibleConfig, api_key: Option<String>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        info!(
            "Initialized OpenAICompatibleLLM: model={}, base_url={}",
            config.model, config.base_url
        );
        Ok(Self {
            client,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            organization_id: config.organization_id.clone(),
            project_id: config.project_id.clone(),
            temperature: config.temperature,
        })
    }
}

/// Human readable failure for a non-success response, preferring the API's own message
fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => format!("HTTP {}", status),
        Err(_) => format!("HTTP {}: {}", status, body.trim()),
    }
}

#[async_trait]
impl StatelessLLMInterface for OpenAICompatibleLLM {
    async fn chat_completion(
        &self,
        messages: Vec<Message>,
        system: Option<&str>,
    ) -> anyhow::Result<String> {
        let mut all_messages = Vec::with_capacity(messages.len() + 1);
        if let Some(sys) = system {
            all_messages.push(Message::system(sys));
        }
        all_messages.extend(messages);

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: &all_messages,
            temperature: self.temperature,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        if let Some(org) = &self.organization_id {
            request = request.header("OpenAI-Organization", org);
        }
        if let Some(project) = &self.project_id {
            request = request.header("OpenAI-Project", project);
        }

        debug!("POST {} ({} messages)", url, all_messages.len());
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("Completion endpoint returned {}", status);
            anyhow::bail!(error_message(status, &text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .context("Malformed completion response")?;

        let first = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("completion response contained no choices"))?;

        Ok(first.message.content.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct Stub {
        status: axum::http::StatusCode,
        reply: String,
        seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    }

    async fn completions(
        State(stub): State<Stub>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (axum::http::StatusCode, String) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        stub.seen.lock().unwrap().push((auth, body));
        (stub.status, stub.reply.clone())
    }

    /// Serve a canned reply on an ephemeral port and return the base URL
    async fn spawn_endpoint(
        status: u16,
        reply: Value,
    ) -> (String, Arc<Mutex<Vec<(Option<String>, Value)>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let stub = Stub {
            status: axum::http::StatusCode::from_u16(status).unwrap(),
            reply: reply.to_string(),
            seen: seen.clone(),
        };
        let app = Router::new()
            .route("/v1/chat/completions", post(completions))
            .with_state(stub);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/v1/", addr), seen)
    }

    fn llm(base_url: String, api_key: Option<&str>) -> OpenAICompatibleLLM {
        let config = OpenAICompatibleConfig {
            base_url,
            ..OpenAICompatibleConfig::default()
        };
        OpenAICompatibleLLM::new(&config, api_key.map(|k| k.to_string())).unwrap()
    }

    #[tokio::test]
    async fn sends_payload_and_returns_first_choice() {
        let (url, seen) = spawn_endpoint(
            200,
            json!({"choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]}),
        )
        .await;

        let out = llm(url, Some("sk-test"))
            .chat_completion(vec![Message::user("hi")], Some("You are a helpful assistant."))
            .await
            .unwrap();
        assert_eq!(out, "first");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (auth, body) = &seen[0];
        assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
        assert_eq!(body["model"], "gpt-4");
        assert!((body["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "You are a helpful assistant.");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "hi");
    }

    #[tokio::test]
    async fn null_content_is_empty() {
        let (url, _) = spawn_endpoint(200, json!({"choices": [{"message": {"content": null}}]})).await;
        let out = llm(url, None)
            .chat_completion(vec![Message::user("hi")], None)
            .await
            .unwrap();
        assert_eq!(out, "");
    }

    #[tokio::test]
    async fn omits_authorization_without_key() {
        let (url, seen) = spawn_endpoint(200, json!({"choices": [{"message": {"content": "ok"}}]})).await;
        llm(url, None)
            .chat_completion(vec![Message::user("hi")], None)
            .await
            .unwrap();
        assert_eq!(seen.lock().unwrap()[0].0, None);
    }

    #[tokio::test]
    async fn surfaces_api_error_message() {
        let (url, _) = spawn_endpoint(
            429,
            json!({"error": {"message": "rate limit exceeded", "type": "requests"}}),
        )
        .await;
        let err = llm(url, Some("sk-test"))
            .chat_completion(vec![Message::user("hi")], None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "rate limit exceeded");
    }

    #[tokio::test]
    async fn empty_choices_is_an_error() {
        let (url, _) = spawn_endpoint(200, json!({"choices": []})).await;
        let err = llm(url, None)
            .chat_completion(vec![Message::user("hi")], None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no choices"));
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let (url, _) = spawn_endpoint(200, json!({"unexpected": true})).await;
        let err = llm(url, None)
            .chat_completion(vec![Message::user("hi")], None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Malformed completion response"));
    }

    #[test]
    fn error_message_falls_back_to_status_and_body() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "upstream down"),
            "HTTP 502 Bad Gateway: upstream down"
        );
        assert_eq!(error_message(StatusCode::UNAUTHORIZED, ""), "HTTP 401 Unauthorized");
    }

    #[tokio::test]
    async fn transport_failure_reaches_translator_error() {
        use crate::languages::TargetLanguage;
        use crate::translate::{TranslateError, Translator};

        // Bind then drop so nothing is listening on the port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let translator = Translator::new(Arc::new(llm(format!("http://{}/v1", addr), None)));
        let err = translator
            .translate("Hello", TargetLanguage::Hindi)
            .await
            .unwrap_err();
        let TranslateError::Failed(message) = err;
        assert!(message.contains("error sending request"), "{}", message);
        assert!(message.contains(&addr.to_string()), "{}", message);
    }
}
