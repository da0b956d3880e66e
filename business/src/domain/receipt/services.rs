use async_trait::async_trait;

use super::errors::ReceiptError;

/// Service port for the OCR collaborator.
///
/// Implementations submit the raw image bytes for text detection and return
/// the full recognized text (the first/top-level detection). Zero detections
/// are reported as an empty string, not an error; only transport, auth, or
/// quota failures map to `ReceiptError::OcrUnavailable`.
#[async_trait]
pub trait TextRecognizerService: Send + Sync {
    async fn recognize_text(&self, image: &[u8]) -> Result<String, ReceiptError>;
}

/// Service port for the text-generation collaborator.
///
/// Takes a fully-built prompt and returns the raw completion text. Call
/// failures map to `ReceiptError::CompletionUnavailable`; what the text
/// contains is the parser's problem, not this port's.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ReceiptError>;
}
