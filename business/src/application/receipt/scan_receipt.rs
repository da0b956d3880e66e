use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::ParsedReceipt;
use crate::domain::receipt::parser::parse_completion;
use crate::domain::receipt::prompt::build_scan_prompt;
use crate::domain::receipt::services::{CompletionService, TextRecognizerService};
use crate::domain::receipt::use_cases::scan_receipt::{
    MAX_IMAGE_BYTES, ScanReceiptParams, ScanReceiptUseCase,
};

pub struct ScanReceiptUseCaseImpl {
    pub recognizer: Arc<dyn TextRecognizerService>,
    pub completer: Arc<dyn CompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ScanReceiptUseCase for ScanReceiptUseCaseImpl {
    async fn execute(&self, params: ScanReceiptParams) -> Result<ParsedReceipt, ReceiptError> {
        if params.image.is_empty() {
            return Err(ReceiptError::NoFileProvided);
        }
        if params.image.len() > MAX_IMAGE_BYTES {
            return Err(ReceiptError::FileTooLarge);
        }

        self.logger.info(&format!(
            "Scanning receipt image ({} bytes, {})",
            params.image.len(),
            params.content_type.as_deref().unwrap_or("unknown type")
        ));

        let recognized_text = self.recognizer.recognize_text(&params.image).await?;
        if recognized_text.is_empty() {
            self.logger.warn("No text detected in receipt image");
        }

        let prompt = build_scan_prompt(&recognized_text);
        let completion = self.completer.complete(&prompt).await?;

        let receipt = parse_completion(&completion)?;

        self.logger.info(&format!(
            "Receipt scanned: {} items found",
            receipt.items.len()
        ));

        Ok(receipt)
    }
}
