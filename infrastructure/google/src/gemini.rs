use async_trait::async_trait;
use serde_json::json;

use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::services::CompletionService;

use crate::client::http_client;

const GEMINI_MODEL: &str = "gemini-pro";

/// Text-generation adapter backed by the Gemini `generateContent` endpoint.
pub struct CompletionGeneratorGemini {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl CompletionGeneratorGemini {
    pub fn new(api_key: String) -> Self {
        Self {
            client: http_client(),
            api_key,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, GEMINI_MODEL, self.api_key
        )
    }

    /// Extracts the completion text from the first candidate.
    fn extract_completion_text(data: &serde_json::Value) -> Result<String, ReceiptError> {
        data["candidates"]
            .get(0)
            .and_then(|candidate| candidate["content"]["parts"].get(0))
            .and_then(|part| part["text"].as_str())
            .map(|text| text.to_string())
            .ok_or(ReceiptError::CompletionUnavailable)
    }
}

#[async_trait]
impl CompletionService for CompletionGeneratorGemini {
    async fn complete(&self, prompt: &str) -> Result<String, ReceiptError> {
        let body = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ],
            "generationConfig": { "temperature": 0.1 },
        });

        let response = self
            .client
            .post(self.generate_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|_| ReceiptError::CompletionUnavailable)?;

        if !response.status().is_success() {
            return Err(ReceiptError::CompletionUnavailable);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| ReceiptError::CompletionUnavailable)?;

        Self::extract_completion_text(&data)
    }
}
