//! JSON records exchanged with the inventory API.
//!
//! DESIGN
//! ======
//! Field names match the backend's column aliases. Decimal columns may arrive
//! as JSON strings (`"2.50"`) or numbers depending on the backend, so they are
//! normalized to display text on the way in. Payment and user shapes are
//! inferred from what the dashboard reads and carry no extra fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// One row of `GET /api/stock`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockRow {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub stock_id: i64,
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub product_name: String,
    /// `None` when the backend sends `null`; rendered as an empty cell.
    #[serde(default, deserialize_with = "deserialize_optional_i64_from_number")]
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub price_per_unit: String,
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub place_location: String,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub shipped_date: Option<String>,
    #[serde(default)]
    pub received_date: Option<String>,
    #[serde(default)]
    pub warranty_start_date: Option<String>,
    #[serde(default)]
    pub warranty_end_date: Option<String>,
}

/// One row of `GET /api/orders`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub order_id: i64,
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub product_name: String,
    /// Email of the ordering user.
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub ordered_by: String,
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub order_date: String,
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub delivery_status: String,
}

/// One row of `GET /api/payments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentRow {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub payment_id: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub order_id: i64,
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub amount: String,
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub date: String,
}

/// One record of `GET /api/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Body of `POST /api/products`. Values are forwarded exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub product_name: String,
    pub company_name: String,
    pub device_type: String,
    pub base_price: String,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    i64_from_value(serde_json::Value::deserialize(deserializer)?)
}

fn deserialize_optional_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        value => i64_from_value(value).map(Some),
    }
}

fn i64_from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<i64, E> {
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(E::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| E::custom(format!("expected integer, got {text:?}"))),
        _ => Err(E::custom("expected number")),
    }
}

/// Accept a string, number or bool and keep its display text; `null` becomes
/// an empty string.
fn deserialize_text_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Bool(flag) => Ok(flag.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected scalar value")),
    }
}
