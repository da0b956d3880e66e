use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::receipt::use_cases::scan_receipt::{ScanReceiptParams, ScanReceiptUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::receipt::dto::{ScanReceiptPayload, ScanReceiptResponse};
use crate::api::tags::ApiTags;

pub struct ReceiptApi {
    scan_receipt_use_case: Arc<dyn ScanReceiptUseCase>,
}

impl ReceiptApi {
    pub fn new(scan_receipt_use_case: Arc<dyn ScanReceiptUseCase>) -> Self {
        Self {
            scan_receipt_use_case,
        }
    }
}

/// Receipt scanning API
///
/// Turns an uploaded receipt photo into structured grocery line items.
#[OpenApi]
impl ReceiptApi {
    /// Scan a receipt image
    ///
    /// Runs OCR on the uploaded image, asks the language model to extract the
    /// food items, and returns them with quantities and estimated prices.
    #[oai(path = "/api/scan-receipt", method = "post", tag = "ApiTags::Receipts")]
    async fn scan_receipt(&self, payload: ScanReceiptPayload) -> ScanReceiptApiResponse {
        let upload = match payload.receipt {
            Some(upload) => upload,
            None => {
                return ScanReceiptApiResponse::BadRequest(Json(ErrorResponse {
                    error: "No image file provided".to_string(),
                }));
            }
        };

        let content_type = upload.content_type().map(|value| value.to_string());
        let image = match upload.into_vec().await {
            Ok(bytes) => bytes,
            Err(_) => {
                return ScanReceiptApiResponse::InternalError(Json(ErrorResponse {
                    error: "Failed to read uploaded file".to_string(),
                }));
            }
        };

        match self
            .scan_receipt_use_case
            .execute(ScanReceiptParams {
                image,
                content_type,
            })
            .await
        {
            Ok(receipt) => ScanReceiptApiResponse::Ok(Json(receipt.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ScanReceiptApiResponse::BadRequest(json),
                    502 => ScanReceiptApiResponse::BadGateway(json),
                    _ => ScanReceiptApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ScanReceiptApiResponse {
    #[oai(status = 200)]
    Ok(Json<ScanReceiptResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use poem::{http::StatusCode, test::TestClient};
    use poem_openapi::OpenApiService;

    use business::domain::receipt::errors::ReceiptError;
    use business::domain::receipt::model::{GroceryItem, ParsedReceipt};

    mock! {
        pub ScanUseCase {}

        #[async_trait]
        impl ScanReceiptUseCase for ScanUseCase {
            async fn execute(
                &self,
                params: ScanReceiptParams,
            ) -> Result<ParsedReceipt, ReceiptError>;
        }
    }

    fn client_for(use_case: MockScanUseCase) -> TestClient<poem::Route> {
        let service = OpenApiService::new(
            ReceiptApi::new(Arc::new(use_case)),
            "Pantry Backend API",
            "0.1.0",
        );
        TestClient::new(poem::Route::new().nest("/", service))
    }

    const BOUNDARY: &str = "X-PANTRY-TEST-BOUNDARY";

    fn multipart_content_type() -> String {
        format!("multipart/form-data; boundary={}", BOUNDARY)
    }

    #[tokio::test]
    async fn should_return_400_with_contract_body_when_no_file_field_is_sent() {
        let mut use_case = MockScanUseCase::new();
        use_case.expect_execute().never();
        let cli = client_for(use_case);

        let resp = cli
            .post("/api/scan-receipt")
            .content_type(multipart_content_type())
            .body(format!("--{}--\r\n", BOUNDARY))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(serde_json::json!({ "error": "No image file provided" }))
            .await;
    }

    #[tokio::test]
    async fn should_return_items_with_the_contract_field_names() {
        let mut use_case = MockScanUseCase::new();
        use_case.expect_execute().returning(|_| {
            Ok(ParsedReceipt {
                items: vec![GroceryItem {
                    name: "Milk".to_string(),
                    quantity: "1".to_string(),
                    estimated_price: 3.5,
                }],
            })
        });
        let cli = client_for(use_case);

        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"receipt\"; filename=\"receipt.jpg\"\r\n\
             Content-Type: image/jpeg\r\n\r\n\
             fake image bytes\r\n\
             --{boundary}--\r\n",
            boundary = BOUNDARY
        );

        let resp = cli
            .post("/api/scan-receipt")
            .content_type(multipart_content_type())
            .body(body)
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(serde_json::json!({
            "items": [
                { "name": "Milk", "quantity": "1", "estimatedPrice": 3.5 }
            ]
        }))
        .await;
    }
}
