/// Errors of the receipt ingestion pipeline.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReceiptError {
    #[error("receipt.no_file_provided")]
    NoFileProvided,
    #[error("receipt.file_too_large")]
    FileTooLarge,
    #[error("receipt.ocr_unavailable")]
    OcrUnavailable,
    #[error("receipt.completion_unavailable")]
    CompletionUnavailable,
    #[error("receipt.unparsable_completion")]
    UnparsableCompletion,
}
