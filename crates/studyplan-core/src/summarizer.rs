//! Optional plan-summarization collaborator.
//!
//! A summarizer turns the rendered plan lines into prose via an external
//! text-generation service. It is strictly best-effort: the planner logs
//! failures and returns the structured plan regardless.

use reqwest::Client;
use serde_json::json;
use tokio::runtime::Runtime;
use url::Url;

/// Turns a rendered plan into prose.
pub trait Summarizer: Send + Sync {
    /// Summarize the joined plan text with the given model identifier.
    fn summarize(
        &self,
        plan_text: &str,
        model: &str,
    ) -> Result<String, Box<dyn std::error::Error>>;
}

/// Summarizer backed by an HTTP text-generation endpoint.
///
/// Sends `{"model": ..., "contents": ...}` and expects a JSON response
/// carrying a top-level `text` field.
pub struct HttpSummarizer {
    endpoint: Url,
    api_key: Option<String>,
    runtime: Runtime,
}

impl HttpSummarizer {
    /// Build a summarizer for `endpoint`, with an optional bearer token.
    pub fn new(
        endpoint: &str,
        api_key: Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            api_key,
            runtime: Runtime::new()?,
        })
    }
}

impl Summarizer for HttpSummarizer {
    fn summarize(
        &self,
        plan_text: &str,
        model: &str,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let body = json!({
            "model": model,
            "contents": plan_text,
        });

        let resp: serde_json::Value = self.runtime.block_on(async {
            let mut request = Client::new().post(self.endpoint.clone()).json(&body);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }
            request.send().await?.error_for_status()?.json().await
        })?;

        let text = resp["text"]
            .as_str()
            .ok_or("missing text in summarizer response")?;

        Ok(text.to_string())
    }
}
