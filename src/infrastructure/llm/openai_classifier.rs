//! OpenAI-compatible chat-completion classifier.

use super::types::{ChatMessage, ChatRequest, ChatResponse};
use crate::domain::entities::{ApiKey, LinkSet, SocialLinks};
use crate::domain::ports::LinkClassifier;
use crate::domain::prompt::{SYSTEM_PROMPT, build_classification_prompt};
use crate::domain::reply::parse_reply;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Endpoint and request parameters for [`OpenAiClassifier`].
#[derive(Debug, Clone)]
pub struct ClassifierSettings {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// [`LinkClassifier`] that sends the prompt as a chat completion and parses
/// the first choice with [`parse_reply`].
pub struct OpenAiClassifier {
    client: Client,
    settings: ClassifierSettings,
}

impl OpenAiClassifier {
    pub fn new(client: Client, settings: ClassifierSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    /// Sends one chat completion and returns the first choice's content.
    ///
    /// # Errors
    ///
    /// - [`AppError::Remote`] on transport failure or non-success status
    /// - [`AppError::Decode`] on an unexpected envelope, zero choices, or a
    ///   choice without content
    pub async fn complete(&self, prompt: &str, api_key: &ApiKey) -> Result<String, AppError> {
        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            max_tokens: self.settings.max_tokens,
        };

        let response = self
            .client
            .post(&self.settings.endpoint)
            .header(header::AUTHORIZATION, api_key.bearer())
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::remote(format!("classification request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::remote(format!("failed to read classification reply: {e}")))?;

        if !status.is_success() {
            return Err(AppError::remote(format!(
                "failed to get response from OpenAI API, status code: {}, body: {}",
                status.as_u16(),
                body
            )));
        }

        let envelope: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::decode(format!("error parsing response body: {e}")))?;

        let choice = envelope
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::decode("no choices returned from OpenAI API"))?;

        choice
            .message
            .content
            .ok_or_else(|| AppError::decode("first choice returned from OpenAI API has no content"))
    }
}

#[async_trait]
impl LinkClassifier for OpenAiClassifier {
    async fn classify(&self, links: &LinkSet, api_key: &ApiKey) -> Result<SocialLinks, AppError> {
        let prompt = build_classification_prompt(links);
        let content = self.complete(&prompt, api_key).await?;
        debug!(reply = %content, "classification reply");

        Ok(parse_reply(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header as header_matcher, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn classifier(server: &MockServer) -> OpenAiClassifier {
        OpenAiClassifier::new(
            Client::new(),
            ClassifierSettings {
                endpoint: format!("{}/v1/chat/completions", server.uri()),
                ..ClassifierSettings::default()
            },
        )
    }

    fn key() -> ApiKey {
        ApiKey::parse("sk-test").unwrap()
    }

    #[test]
    fn test_default_settings() {
        let settings = ClassifierSettings::default();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.model, "gpt-4");
        assert_eq!(settings.max_tokens, 1024);
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header_matcher("authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [
                    {"message": {"content": "first"}},
                    {"message": {"content": "second"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let content = classifier(&server).complete("prompt", &key()).await.unwrap();
        assert_eq!(content, "first");
    }

    #[tokio::test]
    async fn test_complete_null_content_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": null}}]
            })))
            .mount(&server)
            .await;

        let err = classifier(&server).complete("prompt", &key()).await.unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[tokio::test]
    async fn test_complete_non_json_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = classifier(&server).complete("prompt", &key()).await.unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
        assert!(err.to_string().starts_with("error parsing response body"));
    }
}
