//! Template generation route.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::services::generate as generate_service;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub html: String,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `POST /api/generate` — generate one template from a free-text prompt.
///
/// 400 for a blank prompt, 503 when no LLM is configured, 502 for provider
/// failures (the raw error message rides in the body for the error overlay).
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorBody>)> {
    let prompt = body.prompt.trim();
    if prompt.is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, "prompt must not be empty".to_owned()));
    }

    let Some(llm) = state.llm.as_ref() else {
        return Err(error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "generation is not configured on this server".to_owned(),
        ));
    };

    match generate_service::generate_template(llm, prompt).await {
        Ok(generated) => Ok(Json(GenerateResponse { html: generated.html, model: generated.model })),
        Err(e) => {
            tracing::warn!(error = %e, "generate: request failed");
            Err(error_response(StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}

fn error_response(status: StatusCode, error: String) -> (StatusCode, Json<ErrorBody>) {
    (status, Json(ErrorBody { error }))
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
