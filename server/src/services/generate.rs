//! Template generation service — user prompt → LLM → cleaned HTML.
//!
//! DESIGN
//! ======
//! One chat call per generation, no retries: transport and model errors
//! surface to the route layer, which hands the raw message to the client's
//! error overlay. The fixed instruction rides in the system prompt; the
//! user's description is the single user message.

use std::sync::{Arc, OnceLock};

use tracing::info;

use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message};

const DEFAULT_GENERATE_MAX_TOKENS: u32 = 8192;

/// Fixed instruction sent as the system prompt on every generation.
pub const SYSTEM_PROMPT: &str = "\
You are an expert frontend developer specializing in creating beautiful websites with Tailwind CSS.

Generate a complete, single HTML file for the user's request.

Requirements:
1. The output must be a single, complete HTML file.
2. It MUST include the Tailwind CSS CDN script in the <head> section: <script src=\"https://cdn.tailwindcss.com\"></script>.
3. The HTML should be well-structured, semantic, and visually appealing. Use modern design principles.
4. Use placeholder images from https://picsum.photos/ if you need images. For example: <img src=\"https://picsum.photos/800/600\" alt=\"Placeholder\">.
5. Respond with ONLY the raw HTML code. No explanations, no comments about the code, no markdown formatting like ```html. The response must start directly with <!DOCTYPE html>.";

fn generate_max_tokens() -> u32 {
    static VALUE: OnceLock<u32> = OnceLock::new();
    *VALUE.get_or_init(|| {
        std::env::var("GENERATE_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_GENERATE_MAX_TOKENS)
    })
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("model returned an empty response")]
    EmptyResponse,
}

/// A successfully generated template, ready for the splitter.
#[derive(Debug)]
pub struct GeneratedTemplate {
    pub html: String,
    pub model: String,
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Generate a full HTML template for a free-text website description.
///
/// Strips a wrapping markdown fence from the model output and trims it; an
/// output that cleans down to nothing is an error rather than a blank page.
///
/// # Errors
///
/// Returns [`GenerateError::Llm`] for transport/provider failures and
/// [`GenerateError::EmptyResponse`] when the model produced no usable text.
pub async fn generate_template(
    llm: &Arc<dyn LlmChat>,
    prompt: &str,
) -> Result<GeneratedTemplate, GenerateError> {
    info!(prompt_len = prompt.len(), "generate: prompt received");

    let messages = [Message::user(prompt)];
    let response = llm
        .chat(generate_max_tokens(), SYSTEM_PROMPT, &messages)
        .await?;

    info!(
        model = %response.model,
        stop_reason = %response.stop_reason,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "generate: model responded"
    );

    let html = template::strip_markdown_fence(&response.text());
    if html.is_empty() {
        return Err(GenerateError::EmptyResponse);
    }

    Ok(GeneratedTemplate { html, model: response.model })
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
