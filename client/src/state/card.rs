//! Resource card load state and table projection.
//!
//! DESIGN
//! ======
//! A card issues exactly one read on mount. Until it resolves the card is
//! `Loading`; a successful response replaces it with the rows in response
//! order. What a failed read turns into is the card's [`FailurePolicy`]:
//! inventory and orders stay on their loading text, payments fall back to an
//! empty table. There is no retry or re-fetch.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use crate::net::types::{OrderRow, PaymentRow, StockRow};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Ignore the failure; the card keeps showing its loading text.
    StayLoading,
    /// Treat the failure as an empty collection.
    EmptyFallback,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CardState<T> {
    Loading,
    Loaded(Vec<T>),
}

impl<T> Default for CardState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> CardState<T> {
    /// Resolve the single fetch a card performs.
    #[must_use]
    pub fn resolve(result: Result<Vec<T>, String>, policy: FailurePolicy) -> Self {
        match (result, policy) {
            (Ok(rows), _) => Self::Loaded(rows),
            (Err(_), FailurePolicy::EmptyFallback) => Self::Loaded(Vec::new()),
            (Err(_), FailurePolicy::StayLoading) => Self::Loading,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn rows(&self) -> &[T] {
        match self {
            Self::Loading => &[],
            Self::Loaded(rows) => rows,
        }
    }
}

/// A record that renders as one table row.
pub trait TableRow {
    /// Column header labels, left to right.
    const HEADERS: &'static [&'static str];

    /// Stable key for keyed list rendering.
    fn key(&self) -> i64;

    /// Cell text, one entry per header.
    fn cells(&self) -> Vec<String>;
}

impl TableRow for StockRow {
    const HEADERS: &'static [&'static str] = &["Product Name", "Quantity", "Price/Unit", "Location"];

    fn key(&self) -> i64 {
        self.stock_id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.product_name.clone(),
            self.quantity.map(|quantity| quantity.to_string()).unwrap_or_default(),
            self.price_per_unit.clone(),
            self.place_location.clone(),
        ]
    }
}

impl TableRow for OrderRow {
    const HEADERS: &'static [&'static str] = &["Order ID", "Product", "Ordered By", "Date", "Status"];

    fn key(&self) -> i64 {
        self.order_id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.order_id.to_string(),
            self.product_name.clone(),
            self.ordered_by.clone(),
            self.order_date.clone(),
            self.delivery_status.clone(),
        ]
    }
}

impl TableRow for PaymentRow {
    const HEADERS: &'static [&'static str] = &["Payment ID", "Order ID", "Amount", "Status", "Date"];

    fn key(&self) -> i64 {
        self.payment_id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.payment_id.to_string(),
            self.order_id.to_string(),
            self.amount.clone(),
            self.status.clone(),
            self.date.clone(),
        ]
    }
}

/// Static description of one resource card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSpec {
    pub title: &'static str,
    pub loading_text: &'static str,
    /// Placeholder row shown for an empty table, if the card has one.
    pub empty_text: Option<&'static str>,
    pub policy: FailurePolicy,
}

pub const INVENTORY_CARD: CardSpec = CardSpec {
    title: "Inventory",
    loading_text: "Loading inventory...",
    empty_text: None,
    policy: FailurePolicy::StayLoading,
};

pub const ORDERS_CARD: CardSpec = CardSpec {
    title: "Orders",
    loading_text: "Loading orders...",
    empty_text: None,
    policy: FailurePolicy::StayLoading,
};

pub const PAYMENTS_CARD: CardSpec = CardSpec {
    title: "Payments",
    loading_text: "Loading payments...",
    empty_text: Some("No payments found"),
    policy: FailurePolicy::EmptyFallback,
};

/// One rendered `<tr>` of a card's table body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodyRow {
    Data { key: i64, cells: Vec<String> },
    /// A single cell spanning every column.
    Placeholder(&'static str),
}

/// Project loaded rows into table body rows, preserving order.
#[must_use]
pub fn body_rows<T: TableRow>(rows: &[T], empty_text: Option<&'static str>) -> Vec<BodyRow> {
    if rows.is_empty() {
        return empty_text.map(BodyRow::Placeholder).into_iter().collect();
    }
    rows.iter()
        .map(|row| BodyRow::Data { key: row.key(), cells: row.cells() })
        .collect()
}
