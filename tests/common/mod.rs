#![allow(dead_code)]

use serde_json::{Value, json};
use social_links::application::services::SocialLinkService;
use social_links::infrastructure::credentials::StaticCredentials;
use social_links::infrastructure::http::{HttpLinkExtractor, build_http_client};
use social_links::infrastructure::llm::{ClassifierSettings, OpenAiClassifier};
use social_links::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "sk-test-key";
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Builds a lookup service whose classifier talks to `llm`.
pub fn create_test_service(llm: &MockServer, api_key: &str) -> SocialLinkService {
    let client = build_http_client(Some(Duration::from_secs(5))).unwrap();

    let extractor = Arc::new(HttpLinkExtractor::new(client.clone()));
    let classifier = Arc::new(OpenAiClassifier::new(
        client,
        ClassifierSettings {
            endpoint: format!("{}{}", llm.uri(), COMPLETIONS_PATH),
            ..ClassifierSettings::default()
        },
    ));

    SocialLinkService::new(
        extractor,
        classifier,
        Arc::new(StaticCredentials::new(api_key)),
    )
}

pub fn create_test_state(llm: &MockServer, api_key: &str) -> AppState {
    AppState::new(Arc::new(create_test_service(llm, api_key)))
}

/// A chat-completion envelope whose first choice carries `content`.
pub fn chat_reply(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

pub fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!("<!DOCTYPE html><html><head><title>t</title></head><body>{body}</body></html>"),
        "text/html; charset=utf-8",
    )
}

/// Serves `body` as an HTML page at `/` of a fresh mock server.
pub async fn serve_page(body: &str) -> MockServer {
    let page = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(body))
        .mount(&page)
        .await;
    page
}

/// Answers every completion request with `content`.
pub async fn mount_reply(llm: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(content)))
        .mount(llm)
        .await;
}

pub const SOCIAL_PAGE: &str = r#"
    <nav>
        <a href="/about">About</a>
        <a href="https://twitter.com/acme">Twitter</a>
        <a href="https://www.facebook.com/acme">Facebook</a>
        <a href="https://shop.acme.test/cart">Shop</a>
        <a href="mailto:hello@acme.test">Mail</a>
    </nav>
"#;
