use common::{Insight, InsightRequest, Result};

const FENCE: &str = "```";

/// Build the analyst prompt for one signal.
pub fn build_prompt(request: &InsightRequest) -> Result<String> {
    Ok(format!(
        "You are a crypto trading analyst. Analyze the intraday signal and market snapshot. \
         Return a raw JSON object only (no code fences, no markdown) with keys: \
         summary, recommendation, confidence, risks. \
         confidence must be a number between 0 and 1. risks must be a list of strings.\n\n\
         Signal: {}\nAsset: {}\nMarket: {}\n",
        serde_json::to_string(&request.signal)?,
        serde_json::to_string(&request.asset)?,
        serde_json::to_string(&request.market)?,
    ))
}

/// Remove a markdown code fence wrapped around a model reply.
///
/// Text without a fence is returned as-is. An opening fence may carry a
/// language tag (```` ```json ````), which is dropped with it.
pub fn strip_code_fences(text: &str) -> &str {
    if !text.contains(FENCE) {
        return text;
    }

    let mut cleaned = text.trim();
    if let Some(rest) = cleaned.strip_prefix(FENCE) {
        let body = match rest.split_once('\n') {
            Some((tag, body)) if is_language_tag(tag) => body,
            _ => rest,
        };
        cleaned = body.split_once(FENCE).map_or(body, |(inner, _)| inner);
    } else if let Some(rest) = cleaned.strip_suffix(FENCE) {
        cleaned = rest;
    }
    cleaned.trim()
}

fn is_language_tag(line: &str) -> bool {
    line.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Interpret a model reply. Missing fields default; a reply that is not a
/// JSON object becomes a summary-only insight.
pub fn parse_insight(text: &str) -> Insight {
    let cleaned = strip_code_fences(text);
    serde_json::from_str::<Insight>(cleaned).unwrap_or_else(|_| {
        let summary = cleaned.trim();
        Insight {
            summary: if summary.is_empty() {
                "No response.".to_string()
            } else {
                summary.to_string()
            },
            recommendation: "Review summary.".to_string(),
            confidence: 0.0,
            risks: vec!["Model did not return JSON".to_string()],
        }
    })
}
