use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::receipt::errors::ReceiptError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ReceiptError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ReceiptError::NoFileProvided => (StatusCode::BAD_REQUEST, "No image file provided"),
            ReceiptError::FileTooLarge => (
                StatusCode::BAD_REQUEST,
                "Image file exceeds the 5 MB limit",
            ),
            ReceiptError::OcrUnavailable => (
                StatusCode::BAD_GATEWAY,
                "Text recognition service is unavailable",
            ),
            ReceiptError::CompletionUnavailable => (
                StatusCode::BAD_GATEWAY,
                "Receipt parsing service is unavailable",
            ),
            ReceiptError::UnparsableCompletion => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not extract items from the receipt",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
    }
}
