use super::*;
use crate::llm::types::LlmError;
use crate::state::test_helpers::{MockLlm, state_with_llm, state_without_llm};

#[tokio::test]
async fn successful_generation_returns_html_and_model() {
    let state = state_with_llm(MockLlm::with_text("```html\n<!DOCTYPE html><html></html>\n```"));

    let Json(resp) = generate(State(state), Json(GenerateBody { prompt: "a cafe site".into() }))
        .await
        .unwrap();
    assert_eq!(resp.html, "<!DOCTYPE html><html></html>");
    assert_eq!(resp.model, "mock");
}

#[tokio::test]
async fn blank_prompt_is_bad_request() {
    let state = state_with_llm(MockLlm::with_text("<html></html>"));

    let (status, Json(body)) = generate(State(state), Json(GenerateBody { prompt: "   ".into() }))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.error.contains("prompt"));
}

#[tokio::test]
async fn missing_llm_is_service_unavailable() {
    let (status, Json(body)) = generate(
        State(state_without_llm()),
        Json(GenerateBody { prompt: "a portfolio".into() }),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.error.contains("not configured"));
}

#[tokio::test]
async fn provider_failure_is_bad_gateway_with_message() {
    let state = state_with_llm(MockLlm::new(vec![Err(LlmError::ApiResponse {
        status: 429,
        body: "rate limited".into(),
    })]));

    let (status, Json(body)) = generate(State(state), Json(GenerateBody { prompt: "a shop".into() }))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.error.contains("429"));
}
