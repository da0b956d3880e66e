use async_trait::async_trait;

use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::ParsedReceipt;

/// Maximum accepted upload size. Larger images are rejected before any
/// collaborator call is made.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

pub struct ScanReceiptParams {
    pub image: Vec<u8>,
    pub content_type: Option<String>,
}

#[async_trait]
pub trait ScanReceiptUseCase: Send + Sync {
    async fn execute(&self, params: ScanReceiptParams) -> Result<ParsedReceipt, ReceiptError>;
}
