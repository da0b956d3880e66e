/// A single grocery line item extracted from a receipt.
///
/// `quantity` is free-form ("2", "1 lb", "0.5 kg"); the model may answer with
/// a number, which the parser coerces to its string form. No unit semantics
/// are guaranteed beyond best effort.
#[derive(Debug, Clone, PartialEq)]
pub struct GroceryItem {
    pub name: String,
    pub quantity: String,
    pub estimated_price: f64,
}

/// The structured output of one receipt scan: the ordered list of food items
/// detected on the receipt. May be empty when no items survive validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedReceipt {
    pub items: Vec<GroceryItem>,
}
