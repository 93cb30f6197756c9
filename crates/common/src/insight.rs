use async_trait::async_trait;

use crate::{Insight, InsightRequest, Result};

/// Opaque, potentially slow commentary service (e.g. an LLM).
///
/// Implementations own their latency and retry policy. A returned
/// `Insight` is passed through to the caller without validation.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Short provider label, e.g. "gemini".
    fn name(&self) -> &str;

    async fn generate(&self, request: &InsightRequest) -> Result<Insight>;
}
