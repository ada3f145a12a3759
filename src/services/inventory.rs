//! Inventory service — read-side listings and product maintenance.
//!
//! DESIGN
//! ======
//! Routes talk to an [`InventoryStore`] trait object rather than the pool so
//! the HTTP layer can be exercised against an in-memory store. The
//! `PostgreSQL` implementation returns decimals as text and dates as
//! `YYYY-MM-DD` strings, which is the shape the dashboard renders verbatim.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::PgPool;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("invalid product: {0}")]
    Invalid(&'static str),
    #[error("product not found: {0}")]
    NotFound(i32),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    pub company_name: String,
    pub device_type: String,
    pub base_price: String,
}

/// Body of `POST /api/products`. `base_price` is accepted as a JSON string or
/// number and kept as text until it reaches the `NUMERIC` column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewProduct {
    pub product_name: String,
    pub company_name: String,
    pub device_type: String,
    #[serde(deserialize_with = "string_or_number")]
    pub base_price: String,
}

/// Body of `PUT /api/products/{id}`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductUpdate {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub base_price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StockRow {
    pub stock_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub price_per_unit: String,
    pub order_date: Option<String>,
    pub shipped_date: Option<String>,
    pub received_date: Option<String>,
    pub warranty_start_date: Option<String>,
    pub warranty_end_date: Option<String>,
    pub place_location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderRow {
    pub order_id: i32,
    pub ordered_by: String,
    pub product_name: String,
    pub order_date: String,
    pub delivery_status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PaymentRow {
    pub payment_id: i32,
    pub order_id: i32,
    pub amount: String,
    pub status: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRow {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Largest price a `NUMERIC(12, 2)` column holds, exclusive, in cents.
const PRICE_LIMIT_CENTS: f64 = 1e12;

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceInput {
    Text(String),
    Number(serde_json::Number),
}

impl PriceInput {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    PriceInput::deserialize(deserializer).map(PriceInput::into_text)
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<PriceInput>::deserialize(deserializer)?.map(PriceInput::into_text))
}

fn require_text(value: &str, reason: &'static str) -> Result<(), InventoryError> {
    if value.trim().is_empty() {
        return Err(InventoryError::Invalid(reason));
    }
    Ok(())
}

fn validate_price(price: &str) -> Result<(), InventoryError> {
    match price.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && (value * 100.0).round() < PRICE_LIMIT_CENTS => Ok(()),
        _ => Err(InventoryError::Invalid("base_price must be a non-negative number below 10000000000")),
    }
}

impl NewProduct {
    /// Check the fields the `products` table cannot accept.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Invalid`] for a blank text field or a
    /// `base_price` that is negative, not a number, or too large for the
    /// column.
    pub fn validate(&self) -> Result<(), InventoryError> {
        require_text(&self.product_name, "product_name is required")?;
        require_text(&self.company_name, "company_name is required")?;
        require_text(&self.device_type, "device_type is required")?;
        validate_price(&self.base_price)
    }
}

impl ProductUpdate {
    /// Apply the same rules as [`NewProduct::validate`] to the fields present.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Invalid`] when a present field would be
    /// rejected on insert.
    pub fn validate(&self) -> Result<(), InventoryError> {
        if let Some(name) = &self.product_name {
            require_text(name, "product_name is required")?;
        }
        if let Some(company) = &self.company_name {
            require_text(company, "company_name is required")?;
        }
        if let Some(kind) = &self.device_type {
            require_text(kind, "device_type is required")?;
        }
        self.base_price.as_deref().map_or(Ok(()), validate_price)
    }

}

// =============================================================================
// STORE TRAIT
// =============================================================================

/// Storage seam for the inventory API. Enables mocking in tests.
#[async_trait::async_trait]
pub trait InventoryStore: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, InventoryError>;

    /// Insert a validated product and return its new id.
    async fn create_product(&self, product: &NewProduct) -> Result<i32, InventoryError>;

    async fn get_product(&self, product_id: i32) -> Result<Product, InventoryError>;

    /// Overwrite the fields present in `update` and return the stored row.
    async fn update_product(&self, product_id: i32, update: &ProductUpdate) -> Result<Product, InventoryError>;

    /// Remove a product; its stock rows go with it.
    async fn delete_product(&self, product_id: i32) -> Result<(), InventoryError>;

    async fn list_stock(&self) -> Result<Vec<StockRow>, InventoryError>;

    async fn list_orders(&self) -> Result<Vec<OrderRow>, InventoryError>;

    async fn list_payments(&self) -> Result<Vec<PaymentRow>, InventoryError>;

    /// List users, optionally restricted to an exact email match.
    async fn list_users(&self, email: Option<&str>) -> Result<Vec<UserRow>, InventoryError>;
}

// =============================================================================
// POSTGRES STORE
// =============================================================================

pub struct PgInventory {
    pool: PgPool,
}

impl PgInventory {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl InventoryStore for PgInventory {
    async fn list_products(&self) -> Result<Vec<Product>, InventoryError> {
        let rows = sqlx::query_as::<_, Product>(
            r"SELECT product_id, product_name, company_name, device_type,
                     base_price::text AS base_price
              FROM products
              ORDER BY product_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create_product(&self, product: &NewProduct) -> Result<i32, InventoryError> {
        let id: i32 = sqlx::query_scalar(
            r"INSERT INTO products (product_name, company_name, device_type, base_price)
              VALUES ($1, $2, $3, $4::numeric)
              RETURNING product_id",
        )
        .bind(&product.product_name)
        .bind(&product.company_name)
        .bind(&product.device_type)
        .bind(product.base_price.trim())
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn get_product(&self, product_id: i32) -> Result<Product, InventoryError> {
        sqlx::query_as::<_, Product>(
            r"SELECT product_id, product_name, company_name, device_type,
                     base_price::text AS base_price
              FROM products
              WHERE product_id = $1",
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(InventoryError::NotFound(product_id))
    }

    async fn update_product(&self, product_id: i32, update: &ProductUpdate) -> Result<Product, InventoryError> {
        sqlx::query_as::<_, Product>(
            r"UPDATE products
              SET product_name = COALESCE($2, product_name),
                  company_name = COALESCE($3, company_name),
                  device_type  = COALESCE($4, device_type),
                  base_price   = COALESCE($5::numeric, base_price)
              WHERE product_id = $1
              RETURNING product_id, product_name, company_name, device_type,
                        base_price::text AS base_price",
        )
        .bind(product_id)
        .bind(update.product_name.as_deref())
        .bind(update.company_name.as_deref())
        .bind(update.device_type.as_deref())
        .bind(update.base_price.as_deref().map(str::trim))
        .fetch_optional(&self.pool)
        .await?
        .ok_or(InventoryError::NotFound(product_id))
    }

    async fn delete_product(&self, product_id: i32) -> Result<(), InventoryError> {
        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(InventoryError::NotFound(product_id));
        }
        Ok(())
    }

    async fn list_stock(&self) -> Result<Vec<StockRow>, InventoryError> {
        let rows = sqlx::query_as::<_, StockRow>(
            r"SELECT s.stock_id, p.product_name, s.quantity,
                     s.price_per_unit::text                        AS price_per_unit,
                     to_char(s.order_date, 'YYYY-MM-DD')           AS order_date,
                     to_char(s.shipped_date, 'YYYY-MM-DD')         AS shipped_date,
                     to_char(s.received_date, 'YYYY-MM-DD')        AS received_date,
                     to_char(s.warranty_start_date, 'YYYY-MM-DD')  AS warranty_start_date,
                     to_char(s.warranty_end_date, 'YYYY-MM-DD')    AS warranty_end_date,
                     s.place_location
              FROM stock s
              JOIN products p ON s.product_id = p.product_id
              ORDER BY s.stock_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_orders(&self) -> Result<Vec<OrderRow>, InventoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r"SELECT o.order_id, u.email AS ordered_by, p.product_name,
                     to_char(o.order_date, 'YYYY-MM-DD') AS order_date,
                     o.delivery_status
              FROM orders o
              JOIN stock s ON o.stock_id = s.stock_id
              JOIN products p ON s.product_id = p.product_id
              JOIN users u ON o.ordered_by_user_id = u.user_id
              ORDER BY o.order_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_payments(&self) -> Result<Vec<PaymentRow>, InventoryError> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            r"SELECT payment_id, order_id, amount::text AS amount, status,
                     to_char(paid_on, 'YYYY-MM-DD') AS date
              FROM payments
              ORDER BY payment_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_users(&self, email: Option<&str>) -> Result<Vec<UserRow>, InventoryError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r"SELECT user_id, name, email, role
              FROM users
              WHERE $1::text IS NULL OR email = $1
              ORDER BY user_id",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
