use serde_json::Value;

use super::errors::ReceiptError;
use super::model::{GroceryItem, ParsedReceipt};

/// Turns the raw completion text into a validated receipt.
///
/// The model rarely answers with a bare array: completions arrive wrapped in
/// code fences or surrounding prose. Extraction happens in stages: strip
/// fences, try the greedy first-`[`-to-last-`]` match, then fall back to a
/// balanced-bracket scan. Elements that fail validation are dropped; only a
/// completion with no decodable array at all is an error.
pub fn parse_completion(content: &str) -> Result<ParsedReceipt, ReceiptError> {
    let stripped = strip_code_fences(content);
    let values = decode_json_array(&stripped)?;

    let items: Vec<GroceryItem> = values.iter().filter_map(item_from_value).collect();

    Ok(ParsedReceipt { items })
}

/// Removes markdown code fences around the completion, if present.
fn strip_code_fences(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.starts_with("```") {
        trimmed
            .replace("```json", "")
            .replace("```", "")
            .trim()
            .to_string()
    } else {
        trimmed.to_string()
    }
}

fn decode_json_array(content: &str) -> Result<Vec<Value>, ReceiptError> {
    // Greedy span from the first '[' to the last ']'.
    if let Some(m) = regex::Regex::new(r"\[[\s\S]*\]")
        .ok()
        .and_then(|re| re.find(content))
    {
        if let Ok(values) = serde_json::from_str::<Vec<Value>>(m.as_str()) {
            return Ok(values);
        }
    }

    // The greedy span can swallow trailing prose containing ']'; retry with
    // the first balanced array only.
    balanced_array(content)
        .and_then(|candidate| serde_json::from_str::<Vec<Value>>(candidate).ok())
        .ok_or(ReceiptError::UnparsableCompletion)
}

/// Returns the substring spanning the first balanced `[` ... `]` pair,
/// skipping brackets that appear inside JSON strings.
fn balanced_array(content: &str) -> Option<&str> {
    let start = content.find('[')?;
    let bytes = content.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&content[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

fn item_from_value(value: &Value) -> Option<GroceryItem> {
    let name = value.get("name")?.as_str()?.trim();
    if name.is_empty() {
        return None;
    }

    let quantity = match value.get("quantity")? {
        Value::String(quantity) => quantity.clone(),
        Value::Number(quantity) => quantity.to_string(),
        _ => return None,
    };

    let estimated_price = match value.get("estimatedPrice")? {
        Value::Number(price) => price.as_f64()?,
        Value::String(price) => price.trim().trim_start_matches('$').parse().ok()?,
        _ => return None,
    };
    if !estimated_price.is_finite() || estimated_price < 0.0 {
        return None;
    }

    Some(GroceryItem {
        name: name.to_string(),
        quantity,
        estimated_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_a_bare_json_array() {
        let completion = r#"[{"name":"Milk","quantity":"1","estimatedPrice":3.5}]"#;

        let receipt = parse_completion(completion).unwrap();

        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].name, "Milk");
        assert_eq!(receipt.items[0].quantity, "1");
        assert_eq!(receipt.items[0].estimated_price, 3.5);
    }

    #[test]
    fn should_parse_an_array_wrapped_in_code_fences() {
        let completion =
            "```json\n[{\"name\":\"Milk\",\"quantity\":\"1\",\"estimatedPrice\":3.5}]\n```";

        let receipt = parse_completion(completion).unwrap();

        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].name, "Milk");
    }

    #[test]
    fn should_parse_an_array_surrounded_by_prose() {
        let completion = concat!(
            "Here are the food items I found on the receipt:\n",
            r#"[{"name":"Bread","quantity":"2","estimatedPrice":2.1}]"#,
            "\nLet me know if you need anything else."
        );

        let receipt = parse_completion(completion).unwrap();

        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].name, "Bread");
    }

    #[test]
    fn should_fall_back_to_balanced_scan_when_trailing_prose_contains_a_bracket() {
        let completion = concat!(
            r#"[{"name":"Eggs","quantity":"12","estimatedPrice":4.0}]"#,
            "\n(see item [1] above)"
        );

        let receipt = parse_completion(completion).unwrap();

        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].name, "Eggs");
    }

    #[test]
    fn should_fail_when_completion_contains_no_array() {
        let completion = "Sorry, I could not parse this receipt.";

        let result = parse_completion(completion);

        assert_eq!(result, Err(ReceiptError::UnparsableCompletion));
    }

    #[test]
    fn should_fail_when_array_is_malformed_json() {
        let completion = r#"[{"name":"Milk","quantity":]"#;

        let result = parse_completion(completion);

        assert_eq!(result, Err(ReceiptError::UnparsableCompletion));
    }

    #[test]
    fn should_drop_elements_missing_required_fields() {
        let completion = r#"[
            {"name":"Milk","quantity":"1","estimatedPrice":3.5},
            {"name":"","quantity":"1","estimatedPrice":1.0},
            {"quantity":"2","estimatedPrice":2.0},
            {"name":"Bread","estimatedPrice":2.1},
            {"name":"Cheese","quantity":"1"}
        ]"#;

        let receipt = parse_completion(completion).unwrap();

        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].name, "Milk");
    }

    #[test]
    fn should_drop_elements_with_negative_prices() {
        let completion = r#"[
            {"name":"Discount","quantity":"1","estimatedPrice":-1.5},
            {"name":"Milk","quantity":"1","estimatedPrice":3.5}
        ]"#;

        let receipt = parse_completion(completion).unwrap();

        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].name, "Milk");
    }

    #[test]
    fn should_drop_elements_with_non_finite_prices() {
        // "NaN" and "inf" pass f64 parsing but must not reach the response.
        let completion = r#"[
            {"name":"Mystery","quantity":"1","estimatedPrice":"NaN"},
            {"name":"Infinite","quantity":"1","estimatedPrice":"inf"},
            {"name":"Milk","quantity":"1","estimatedPrice":3.5}
        ]"#;

        let receipt = parse_completion(completion).unwrap();

        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].name, "Milk");
    }

    #[test]
    fn should_coerce_numeric_quantity_and_string_price() {
        let completion = r#"[{"name":"Apples","quantity":2,"estimatedPrice":"$4.20"}]"#;

        let receipt = parse_completion(completion).unwrap();

        assert_eq!(receipt.items[0].quantity, "2");
        assert_eq!(receipt.items[0].estimated_price, 4.2);
    }

    #[test]
    fn should_return_empty_receipt_when_no_elements_survive_validation() {
        let completion = r#"[{"name":"","quantity":"1","estimatedPrice":1.0}]"#;

        let receipt = parse_completion(completion).unwrap();

        assert!(receipt.items.is_empty());
    }

    #[test]
    fn should_return_empty_receipt_for_an_empty_array() {
        let receipt = parse_completion("[]").unwrap();

        assert!(receipt.items.is_empty());
    }
}
