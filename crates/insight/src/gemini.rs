use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use common::{Error, Insight, InsightProvider, InsightRequest, Result};

use crate::prompt::{build_prompt, parse_insight};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Google Gemini `generateContent` client producing trade commentary.
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    http: Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .use_rustls_tls()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http,
        })
    }

    /// Point the client at a different host (proxies, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });

        let resp = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Insight(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            warn!(model = %self.model, status = %status, "Gemini request failed");
            return Err(Error::Insight(format!("HTTP {status}: {text}")));
        }

        let reply: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| Error::Insight(e.to_string()))?;
        Ok(reply.text())
    }
}

#[async_trait]
impl InsightProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &InsightRequest) -> Result<Insight> {
        if !self.is_configured() {
            return Ok(not_configured());
        }

        let prompt = build_prompt(request)?;
        debug!(symbol = %request.asset.symbol, model = %self.model, "Requesting insight");
        let text = self.generate_text(&prompt).await?;
        Ok(parse_insight(&text))
    }
}

fn not_configured() -> Insight {
    Insight {
        summary: "Missing GEMINI_API_KEY.".to_string(),
        recommendation: "Set GEMINI_API_KEY in .env.".to_string(),
        confidence: 0.0,
        risks: vec!["AI provider not configured".to_string()],
    }
}

// ─── Response types ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let reply: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [
                {"content": {"parts": [{"text": "{\"summary\": "}, {"text": "\"ok\"}"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(reply.text(), r#"{"summary": "ok"}"#);
    }

    #[test]
    fn blocked_response_has_no_text() {
        let reply: GenerateResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert_eq!(reply.text(), "");
    }

    #[test]
    fn blank_key_is_not_configured() {
        let client = GeminiClient::new("  ", "gemini-1.5-flash").unwrap();
        assert!(!client.is_configured());
        assert_eq!(client.name(), "gemini");
    }
}
