//! Order history loader.
//!
//! Reads the exported JSON document and validates every record up front:
//! required fields must be present and numeric fields must convert.
//! Errors carry the record index and the offending field name.

use super::schema::{LineItem, Order};
use crate::utils::config::{
    BILL_FIELD_NAMES, DELIVERY_FIELD_NAMES, ID_FIELD_NAMES, ITEMS_FIELD_NAMES,
    ITEM_NAME_FIELD_NAMES, NET_TOTAL_FIELD_NAMES, QUANTITY_FIELD_NAMES, RESTAURANT_FIELD_NAMES,
    TIME_FIELD_NAMES,
};
use crate::utils::error::ParseError;
use log::{debug, info, warn};
use serde_json::{Map, Value};
use std::path::Path;

/// Load and validate an order history file
///
/// **Public** - main entry point for loading
///
/// # Arguments
/// * `input_path` - Path to the exported JSON document
///
/// # Returns
/// Orders in document order
///
/// # Errors
/// * `ParseError::Io` - File cannot be read
/// * `ParseError::MalformedInput` - Not JSON, or not an array of objects
/// * `ParseError::MissingField` - A record lacks a required field
/// * `ParseError::ValueConversion` - A numeric field does not parse
pub fn load_orders(input_path: impl AsRef<Path>) -> Result<Vec<Order>, ParseError> {
    let input_path = input_path.as_ref();

    info!("Loading orders from: {}", input_path.display());

    let text = std::fs::read_to_string(input_path)?;
    let raw: Value = serde_json::from_str(&text)
        .map_err(|e| ParseError::MalformedInput(format!("invalid JSON: {}", e)))?;

    let orders = parse_orders(&raw)?;
    info!("Loaded {} orders", orders.len());

    Ok(orders)
}

/// Validate an already-decoded JSON document into orders
///
/// **Public** - used by `load_orders` and directly by tests
pub fn parse_orders(raw: &Value) -> Result<Vec<Order>, ParseError> {
    let records = raw.as_array().ok_or_else(|| {
        ParseError::MalformedInput(format!(
            "expected an array of orders, found {}",
            json_kind(raw)
        ))
    })?;

    debug!("Validating {} order records", records.len());

    records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_order(index, record))
        .collect()
}

/// Validate a single order record
///
/// **Private** - internal helper for parse_orders
fn parse_order(index: usize, record: &Value) -> Result<Order, ParseError> {
    let obj = record.as_object().ok_or_else(|| {
        ParseError::MalformedInput(format!(
            "order #{} is {}, expected an object",
            index,
            json_kind(record)
        ))
    })?;

    let id = required_text(obj, index, "", ID_FIELD_NAMES)?;
    let restaurant = required_text(obj, index, "", RESTAURANT_FIELD_NAMES)?;
    let ordered_at = required_text(obj, index, "", TIME_FIELD_NAMES)?;
    let restaurant_bill = required_amount(obj, index, BILL_FIELD_NAMES)?;
    let delivery_charge = required_amount(obj, index, DELIVERY_FIELD_NAMES)?;
    let net_total = required_amount(obj, index, NET_TOTAL_FIELD_NAMES)?;
    let items = parse_items(obj, index)?;

    // Net total is trusted as exported, but an impossible value is worth a note
    if net_total > restaurant_bill + delivery_charge {
        warn!(
            "Order #{} ({}): net total {} exceeds gross {}",
            index,
            id,
            net_total,
            restaurant_bill + delivery_charge
        );
    }

    Ok(Order {
        id,
        restaurant,
        ordered_at,
        restaurant_bill,
        delivery_charge,
        net_total,
        items,
    })
}

/// Validate the line items of one order
///
/// **Private** - internal helper for parse_order
fn parse_items(obj: &Map<String, Value>, index: usize) -> Result<Vec<LineItem>, ParseError> {
    let (field, value) = required_field(obj, index, "", ITEMS_FIELD_NAMES)?;

    let entries = value.as_array().ok_or_else(|| {
        ParseError::MalformedInput(format!(
            "order #{}: '{}' is {}, expected an array",
            index,
            field,
            json_kind(value)
        ))
    })?;

    let mut items = Vec::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        let prefix = format!("{}[{}].", field, position);
        let item = entry.as_object().ok_or_else(|| {
            ParseError::MalformedInput(format!(
                "order #{}: '{}' is {}, expected an object",
                index,
                prefix.trim_end_matches('.'),
                json_kind(entry)
            ))
        })?;

        let name = required_text(item, index, &prefix, ITEM_NAME_FIELD_NAMES)?;
        let (qty_field, qty_value) = required_field(item, index, &prefix, QUANTITY_FIELD_NAMES)?;
        let quantity = parse_quantity(qty_value).ok_or_else(|| ParseError::ValueConversion {
            index,
            field: qty_field,
            value: qty_value.to_string(),
        })?;

        items.push(LineItem { name, quantity });
    }

    Ok(items)
}

/// Find the first present, non-null field among `names`
///
/// **Private** - returns the qualified field name for error reporting
fn required_field<'a>(
    obj: &'a Map<String, Value>,
    index: usize,
    prefix: &str,
    names: &[&str],
) -> Result<(String, &'a Value), ParseError> {
    names
        .iter()
        .find_map(|name| {
            obj.get(*name)
                .filter(|v| !v.is_null())
                .map(|v| (format!("{}{}", prefix, name), v))
        })
        .ok_or_else(|| ParseError::MissingField {
            index,
            field: format!("{}{}", prefix, names.first().copied().unwrap_or("?")),
        })
}

fn required_text(
    obj: &Map<String, Value>,
    index: usize,
    prefix: &str,
    names: &[&str],
) -> Result<String, ParseError> {
    let (field, value) = required_field(obj, index, prefix, names)?;
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(ParseError::MalformedInput(format!(
            "order #{}: '{}' is {}, expected text",
            index,
            field,
            json_kind(other)
        ))),
    }
}

fn required_amount(
    obj: &Map<String, Value>,
    index: usize,
    names: &[&str],
) -> Result<f64, ParseError> {
    let (field, value) = required_field(obj, index, "", names)?;
    parse_amount(value).ok_or_else(|| ParseError::ValueConversion {
        index,
        field,
        value: value.to_string(),
    })
}

/// Parse a money amount from a JSON number or decimal string
///
/// **Public** - shared coercion for bill, delivery and net fields
pub fn parse_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    amount.is_finite().then_some(amount)
}

/// Parse an item quantity from a JSON integer or integer string
///
/// **Public** - fractional and negative quantities are rejected, but a
/// whole float such as `2.0` is accepted
pub fn parse_quantity(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_quantity)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

fn whole_quantity(f: f64) -> Option<u64> {
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64).then_some(f as u64)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> Value {
        json!({
            "order_id": 91234,
            "restaurant_name": "A",
            "order_time": "2023-03-15T10:00:00",
            "order_restaurant_bill": "100",
            "order_delivery_charge": 20,
            "order_total": 110,
            "order_items": [{"name": "X", "quantity": "2"}]
        })
    }

    #[test]
    fn test_parse_amount_accepts_numbers_and_strings() {
        assert_eq!(parse_amount(&json!(12.5)), Some(12.5));
        assert_eq!(parse_amount(&json!(" 40.25 ")), Some(40.25));
        assert_eq!(parse_amount(&json!("free")), None);
        assert_eq!(parse_amount(&json!("NaN")), None);
        assert_eq!(parse_amount(&json!(true)), None);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(&json!(3)), Some(3));
        assert_eq!(parse_quantity(&json!("4")), Some(4));
        assert_eq!(parse_quantity(&json!(2.0)), Some(2));
        assert_eq!(parse_quantity(&json!(1.5)), None);
        assert_eq!(parse_quantity(&json!(2.5)), None);
        assert_eq!(parse_quantity(&json!(-2.0)), None);
        assert_eq!(parse_quantity(&json!(-1)), None);
        assert_eq!(parse_quantity(&json!("two")), None);
    }

    #[test]
    fn test_parse_order_coerces_fields() {
        let order = parse_order(0, &sample_record()).unwrap();
        assert_eq!(order.id, "91234");
        assert_eq!(order.restaurant_bill, 100.0);
        assert_eq!(order.delivery_charge, 20.0);
        assert_eq!(order.net_total, 110.0);
        assert_eq!(order.items, vec![LineItem { name: "X".to_string(), quantity: 2 }]);
    }

    #[test]
    fn test_net_total_alias() {
        let mut record = sample_record();
        let obj = record.as_object_mut().unwrap();
        obj.remove("order_total");
        obj.insert("net_total".to_string(), json!("99.5"));

        let order = parse_order(0, &record).unwrap();
        assert_eq!(order.net_total, 99.5);
    }

    #[test]
    fn test_null_field_is_missing() {
        let mut record = sample_record();
        record["restaurant_name"] = Value::Null;

        match parse_order(4, &record) {
            Err(ParseError::MissingField { index, field }) => {
                assert_eq!(index, 4);
                assert_eq!(field, "restaurant_name");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_item_errors_name_item_position() {
        let mut record = sample_record();
        record["order_items"] = json!([{"name": "X", "quantity": 1}, {"name": "Y", "quantity": "lots"}]);

        match parse_order(2, &record) {
            Err(ParseError::ValueConversion { index, field, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(field, "order_items[1].quantity");
            }
            other => panic!("expected ValueConversion, got {:?}", other),
        }
    }

    #[test]
    fn test_whole_float_quantity_loads() {
        let mut record = sample_record();
        record["order_items"] = json!([{"name": "X", "quantity": 2.0}]);

        let orders = parse_orders(&json!([record])).unwrap();
        assert_eq!(orders[0].items[0].quantity, 2);
    }

    #[test]
    fn test_net_above_gross_is_kept() {
        let mut record = sample_record();
        record["order_total"] = json!(500);

        let order = parse_order(0, &record).unwrap();
        assert_eq!(order.net_total, 500.0);
        assert!(order.net_total > order.gross_total());
    }

    #[test]
    fn test_non_object_record_is_malformed() {
        let result = parse_orders(&json!([sample_record(), 42]));
        assert!(matches!(result, Err(ParseError::MalformedInput(_))));
    }
}
