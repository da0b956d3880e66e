use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::json;

use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::services::TextRecognizerService;

use crate::client::http_client;

/// OCR adapter backed by the Google Cloud Vision `images:annotate` endpoint
/// with the `TEXT_DETECTION` feature.
pub struct TextRecognizerVision {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TextRecognizerVision {
    pub fn new(api_key: String) -> Self {
        Self {
            client: http_client(),
            api_key,
            base_url: "https://vision.googleapis.com/v1".to_string(),
        }
    }

    fn annotate_url(&self) -> String {
        format!("{}/images:annotate?key={}", self.base_url, self.api_key)
    }

    /// Pulls the full recognized text out of an annotate response.
    ///
    /// Vision returns the whole detected text as the first annotation,
    /// followed by per-word entries. Zero annotations means a blank image,
    /// which is the empty string, not an error. A per-image `error` object in
    /// an otherwise successful response still counts as a failed call.
    fn extract_recognized_text(data: &serde_json::Value) -> Result<String, ReceiptError> {
        let response = data["responses"].get(0).ok_or(ReceiptError::OcrUnavailable)?;

        if response.get("error").is_some() {
            return Err(ReceiptError::OcrUnavailable);
        }

        let text = response["textAnnotations"]
            .get(0)
            .and_then(|annotation| annotation["description"].as_str())
            .unwrap_or("");

        Ok(text.to_string())
    }
}

#[async_trait]
impl TextRecognizerService for TextRecognizerVision {
    async fn recognize_text(&self, image: &[u8]) -> Result<String, ReceiptError> {
        let body = json!({
            "requests": [
                {
                    "image": { "content": BASE64.encode(image) },
                    "features": [ { "type": "TEXT_DETECTION" } ],
                }
            ]
        });

        let response = self
            .client
            .post(self.annotate_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|_| ReceiptError::OcrUnavailable)?;

        if !response.status().is_success() {
            return Err(ReceiptError::OcrUnavailable);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| ReceiptError::OcrUnavailable)?;

        Self::extract_recognized_text(&data)
    }
}
