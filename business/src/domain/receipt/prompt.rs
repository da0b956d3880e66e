/// Builds the instruction sent to the text-generation collaborator.
///
/// The prompt embeds the recognized receipt text and pins the output contract:
/// food items only, one object per item with `name`, `quantity` and
/// `estimatedPrice`, as a bare JSON array.
pub fn build_scan_prompt(recognized_text: &str) -> String {
    format!(
        r#"Parse this grocery receipt text and extract only the food items with their quantities and estimated prices. Format as JSON array with objects containing: name, quantity, estimatedPrice. Ignore non-food items, taxes, totals, and store information.

Example output:
[{{"name":"Milk","quantity":"1","estimatedPrice":3.5}},{{"name":"Apples","quantity":"2 lb","estimatedPrice":4.2}}]

Return ONLY the JSON array, no additional text.

Receipt text:
{}"#,
        recognized_text
    )
}
