//! OpenAI-compatible API client.
//!
//! Speaks both `/v1/chat/completions` and `/v1/responses`, selected by
//! `LLM_OPENAI_MODE`; any OpenAI-compatible endpoint works via
//! `LLM_OPENAI_BASE_URL`. Pure parsing helpers for testability.

use std::time::Duration;

use serde::Serialize;

use super::config::{LlmTimeouts, OpenAiApiMode};
use super::types::{ChatResponse, ContentBlock, LlmError, Message};

// =============================================================================
// CLIENT
// =============================================================================

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    mode: OpenAiApiMode,
}

impl OpenAiClient {
    pub fn new(
        api_key: String,
        mode: OpenAiApiMode,
        base_url: String,
        timeouts: LlmTimeouts,
    ) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url, mode })
    }

    pub async fn chat(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        match self.mode {
            OpenAiApiMode::ChatCompletions => {
                self.chat_completions(model, max_tokens, system, messages).await
            }
            OpenAiApiMode::Responses => self.responses(model, max_tokens, system, messages).await,
        }
    }

    async fn chat_completions(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        let wire_messages = build_chat_completions_messages(system, messages);
        let body = CcRequest { model, max_tokens, messages: &wire_messages };
        let text = self.send_json("/chat/completions", &body).await?;
        parse_chat_completions_response(&text)
    }

    async fn responses(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        let input = build_responses_input(messages);
        let body = RespRequest { model, max_output_tokens: max_tokens, instructions: system, input: &input };
        let text = self.send_json("/responses", &body).await?;
        parse_responses_response(&text)
    }

    async fn send_json(&self, path: &str, body: &impl Serialize) -> Result<String, LlmError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }
        Ok(text)
    }
}

// =============================================================================
// CHAT COMPLETIONS — wire types
// =============================================================================

#[derive(Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [CcMessage],
}

#[derive(Serialize)]
struct CcMessage {
    role: String,
    content: String,
}

#[derive(serde::Deserialize)]
struct CcResponse {
    choices: Vec<CcChoice>,
    model: String,
    usage: CcUsage,
}

#[derive(serde::Deserialize)]
struct CcChoice {
    message: CcChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(serde::Deserialize)]
struct CcChoiceMessage {
    content: Option<String>,
}

#[derive(serde::Deserialize)]
struct CcUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

/// The chat-completions API carries the system prompt as the first message.
fn build_chat_completions_messages(system: &str, messages: &[Message]) -> Vec<CcMessage> {
    let mut out = Vec::with_capacity(messages.len() + 1);
    if !system.is_empty() {
        out.push(CcMessage { role: "system".to_owned(), content: system.to_owned() });
    }
    for message in messages {
        out.push(CcMessage { role: message.role.clone(), content: message.content.clone() });
    }
    out
}

fn parse_chat_completions_response(json: &str) -> Result<ChatResponse, LlmError> {
    let api: CcResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let choice = api
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::ApiParse("response carried no choices".to_owned()))?;

    let mut content = Vec::new();
    if let Some(text) = choice.message.content {
        content.push(ContentBlock::Text { text });
    }

    Ok(ChatResponse {
        content,
        model: api.model,
        stop_reason: choice.finish_reason.unwrap_or_else(|| "stop".to_owned()),
        input_tokens: api.usage.prompt_tokens,
        output_tokens: api.usage.completion_tokens,
    })
}

// =============================================================================
// RESPONSES — wire types
// =============================================================================

#[derive(Serialize)]
struct RespRequest<'a> {
    model: &'a str,
    max_output_tokens: u32,
    instructions: &'a str,
    input: &'a [RespInputMessage],
}

#[derive(Serialize)]
struct RespInputMessage {
    #[serde(rename = "type")]
    item_type: &'static str,
    role: String,
    content: Vec<RespInputText>,
}

#[derive(Serialize)]
struct RespInputText {
    #[serde(rename = "type")]
    content_type: &'static str,
    text: String,
}

#[derive(serde::Deserialize)]
struct RespResponse {
    output: Option<Vec<RespOutputItem>>,
    output_text: Option<String>,
    model: String,
    incomplete_details: Option<RespIncompleteDetails>,
    usage: RespUsage,
}

#[derive(serde::Deserialize)]
#[serde(tag = "type")]
enum RespOutputItem {
    #[serde(rename = "message")]
    Message {
        #[serde(default)]
        content: Vec<RespOutputPart>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(serde::Deserialize)]
struct RespOutputPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

#[derive(serde::Deserialize)]
struct RespIncompleteDetails {
    reason: Option<String>,
}

#[derive(serde::Deserialize)]
struct RespUsage {
    input_tokens: u64,
    output_tokens: u64,
}

/// The responses API takes the system prompt as `instructions`; the
/// conversation rides in `input` as typed message items.
fn build_responses_input(messages: &[Message]) -> Vec<RespInputMessage> {
    messages
        .iter()
        .map(|message| RespInputMessage {
            item_type: "message",
            role: message.role.clone(),
            content: vec![RespInputText { content_type: "input_text", text: message.content.clone() }],
        })
        .collect()
}

fn parse_responses_response(json: &str) -> Result<ChatResponse, LlmError> {
    let api: RespResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let mut content = Vec::new();
    match api.output {
        Some(items) => {
            for item in items {
                let RespOutputItem::Message { content: parts } = item else {
                    continue;
                };
                for part in parts {
                    if matches!(part.kind.as_str(), "output_text" | "text") && !part.text.is_empty() {
                        content.push(ContentBlock::Text { text: part.text });
                    }
                }
            }
        }
        // Some compatible servers return the flattened `output_text` only.
        None => {
            if let Some(text) = api.output_text {
                if !text.is_empty() {
                    content.push(ContentBlock::Text { text });
                }
            }
        }
    }

    let truncated = api
        .incomplete_details
        .as_ref()
        .and_then(|details| details.reason.as_deref())
        == Some("max_output_tokens");
    let stop_reason = if truncated { "max_tokens".to_owned() } else { "end_turn".to_owned() };

    Ok(ChatResponse {
        content,
        model: api.model,
        stop_reason,
        input_tokens: api.usage.input_tokens,
        output_tokens: api.usage.output_tokens,
    })
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
