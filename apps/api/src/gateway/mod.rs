/// Scoring gateway client — the single point of entry for all AI calls in Shortlist.
///
/// ARCHITECTURAL RULE: No other module may call the AI gateway directly.
/// All model interactions MUST go through this module.
///
/// Model: gemini-2.5-flash (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The model used for all scoring calls in Shortlist.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Gateway returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

// The gateway streams server-sent events; each `data: ` line carries one of
// these chunks. Every field is optional so a malformed or partial chunk
// deserializes to an empty one instead of failing the whole response.
#[derive(Debug, Deserialize)]
struct StreamChunk {
    candidates: Option<Vec<ChunkCandidate>>,
}

#[derive(Debug, Deserialize)]
struct ChunkCandidate {
    content: Option<ChunkContent>,
}

#[derive(Debug, Deserialize)]
struct ChunkContent {
    parts: Option<Vec<ChunkPart>>,
}

#[derive(Debug, Deserialize)]
struct ChunkPart {
    text: Option<String>,
}

/// The single gateway client used by all scoring in Shortlist.
/// Wraps the streaming generate-content endpoint and reassembles the SSE body.
#[derive(Clone)]
pub struct ScoringClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ScoringClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            api_key,
        }
    }

    /// Sends a prompt to the gateway and returns the concatenated text of the
    /// streamed response.
    pub async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let url = format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse",
            self.base_url.trim_end_matches('/'),
            MODEL
        );

        let request_body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header(
                "X-Gateway-Authorization",
                format!("Bearer {}", self.api_key),
            )
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let text = collect_sse_text(&body);

        if text.trim().is_empty() {
            return Err(GatewayError::EmptyContent);
        }

        debug!("Gateway call succeeded: {} chars of content", text.len());
        Ok(text)
    }
}

/// Reassembles the text content from an SSE response body: every `data: ` line
/// is parsed as a chunk and its first text part appended. Lines that are not
/// data or do not parse are skipped.
fn collect_sse_text(body: &str) -> String {
    let mut out = String::new();
    for line in body.lines() {
        let Some(payload) = line.strip_prefix("data: ") else {
            continue;
        };
        let Ok(chunk) = serde_json::from_str::<StreamChunk>(payload) else {
            continue;
        };
        let text = chunk
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .and_then(|p| p.into_iter().next())
            .and_then(|p| p.text);
        if let Some(text) = text {
            out.push_str(&text);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_sse_text_concatenates_chunks() {
        let body = concat!(
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"8\"}]}}]}\n",
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"5\"}]}}]}\n",
        );
        assert_eq!(collect_sse_text(body), "85");
    }

    #[test]
    fn test_collect_sse_text_skips_malformed_lines() {
        let body = concat!(
            "data: {not valid json\n",
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"72\"}]}}]}\n",
        );
        assert_eq!(collect_sse_text(body), "72");
    }

    #[test]
    fn test_collect_sse_text_ignores_non_data_lines() {
        let body = concat!(
            "event: ping\n",
            ": comment\n",
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"90\"}]}}]}\n",
        );
        assert_eq!(collect_sse_text(body), "90");
    }

    #[test]
    fn test_collect_sse_text_handles_chunks_without_text() {
        let body = concat!(
            "data: {\"candidates\":[]}\n",
            "data: {\"candidates\":[{\"content\":{\"parts\":[]}}]}\n",
            "data: {}\n",
        );
        assert_eq!(collect_sse_text(body), "");
    }

    #[test]
    fn test_collect_sse_text_empty_body() {
        assert_eq!(collect_sse_text(""), "");
    }
}
