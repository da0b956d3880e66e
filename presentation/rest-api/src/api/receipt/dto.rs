use poem_openapi::{Multipart, Object, types::multipart::Upload};
use serde::{Deserialize, Serialize};

use business::domain::receipt::model::{GroceryItem, ParsedReceipt};

/// Multipart payload for receipt scanning. The file field is optional so a
/// missing upload maps to the contract's 400 body instead of a generic
/// multipart parse error.
#[derive(Debug, Multipart)]
pub struct ScanReceiptPayload {
    /// Receipt image (JPEG/PNG, max 5 MB)
    pub receipt: Option<Upload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct GroceryItemResponse {
    /// Item name as printed on the receipt, cleaned up
    pub name: String,
    /// Free-form quantity, e.g. "2" or "1 lb"
    pub quantity: String,
    /// Estimated price in currency units
    #[oai(rename = "estimatedPrice")]
    #[serde(rename = "estimatedPrice")]
    pub estimated_price: f64,
}

impl From<GroceryItem> for GroceryItemResponse {
    fn from(item: GroceryItem) -> Self {
        Self {
            name: item.name,
            quantity: item.quantity,
            estimated_price: item.estimated_price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ScanReceiptResponse {
    /// Food items detected on the receipt, possibly empty
    pub items: Vec<GroceryItemResponse>,
}

impl From<ParsedReceipt> for ScanReceiptResponse {
    fn from(receipt: ParsedReceipt) -> Self {
        Self {
            items: receipt.items.into_iter().map(|item| item.into()).collect(),
        }
    }
}
