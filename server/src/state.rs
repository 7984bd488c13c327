//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! editor keeps its document in the browser, so the server is stateless apart
//! from the optional LLM client handle.

use std::sync::Arc;

use crate::llm::LlmChat;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the LLM handle is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { llm }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::llm::types::{ChatResponse, ContentBlock, LlmError, Message};
    use std::sync::Mutex;

    /// Scripted mock LLM: pops queued responses, errors when exhausted.
    pub struct MockLlm {
        responses: Mutex<Vec<Result<ChatResponse, LlmError>>>,
        pub calls: Mutex<Vec<String>>,
    }

    impl MockLlm {
        #[must_use]
        pub fn new(responses: Vec<Result<ChatResponse, LlmError>>) -> Self {
            Self { responses: Mutex::new(responses), calls: Mutex::new(Vec::new()) }
        }

        /// Mock that always answers with a single text block.
        #[must_use]
        pub fn with_text(text: &str) -> Self {
            Self::new(vec![Ok(text_response(text))])
        }
    }

    #[async_trait::async_trait]
    impl LlmChat for MockLlm {
        async fn chat(
            &self,
            _max_tokens: u32,
            _system: &str,
            messages: &[Message],
        ) -> Result<ChatResponse, LlmError> {
            if let Some(last) = messages.last() {
                self.calls.lock().unwrap().push(last.content.clone());
            }
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                Err(LlmError::ApiRequest("mock exhausted".into()))
            } else {
                responses.remove(0)
            }
        }
    }

    /// A `ChatResponse` carrying one text block.
    #[must_use]
    pub fn text_response(text: &str) -> ChatResponse {
        ChatResponse {
            content: vec![ContentBlock::Text { text: text.to_owned() }],
            model: "mock".into(),
            stop_reason: "end_turn".into(),
            input_tokens: 0,
            output_tokens: 0,
        }
    }

    /// App state with no LLM configured.
    #[must_use]
    pub fn state_without_llm() -> AppState {
        AppState::new(None)
    }

    /// App state wrapping the given mock LLM.
    #[must_use]
    pub fn state_with_llm(llm: MockLlm) -> AppState {
        AppState::new(Some(Arc::new(llm)))
    }
}
