//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub error, since generation only happens in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<String, String>`: the error string is either the
//! server's JSON `error` field (the raw provider message) or a generic
//! status-code message, and feeds the dismissible error overlay directly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
const GENERATE_ENDPOINT: &str = "/api/generate";

#[cfg(any(test, feature = "hydrate"))]
fn generate_failed_message(status: u16) -> String {
    format!("generation request failed: {status}")
}

/// Request a generated template for `prompt` via `POST /api/generate`.
///
/// # Errors
///
/// Returns the server's error message, or a transport error string.
pub async fn generate(prompt: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            prompt: &'a str,
        }

        #[derive(serde::Deserialize)]
        struct GenerateResponse {
            html: String,
        }

        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: String,
        }

        let resp = gloo_net::http::Request::post(GENERATE_ENDPOINT)
            .json(&Body { prompt })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.ok() {
            let status = resp.status();
            return Err(resp
                .json::<ErrorResponse>()
                .await
                .map_or_else(|_| generate_failed_message(status), |body| body.error));
        }

        let body: GenerateResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.html)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prompt;
        Err("not available on server".to_owned())
    }
}
