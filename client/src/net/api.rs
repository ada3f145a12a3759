//! REST API helpers for the inventory backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs returning an error, since these endpoints are
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. A non-success status and a
//! transport failure both come back as `Err(String)`; the text is only ever
//! logged, never shown to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{NewProduct, OrderRow, PaymentRow, StockRow, User};

/// API origin used when `DASHBOARD_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

pub const STOCK_PATH: &str = "/api/stock";
pub const ORDERS_PATH: &str = "/api/orders";
pub const PAYMENTS_PATH: &str = "/api/payments";
pub const USERS_PATH: &str = "/api/users";
pub const PRODUCTS_PATH: &str = "/api/products";

/// API origin baked in at build time.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("DASHBOARD_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "csr"))]
fn endpoint_with_base(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(path: &str) -> String {
    endpoint_with_base(api_base(), path)
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(path: &str, status: u16) -> String {
    format!("{path} request failed: {status}")
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(request: gloo_net::http::RequestBuilder, path: &str) -> Result<T, String> {
    let resp = request.send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(path, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch all stock rows from `GET /api/stock`.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-OK status, or a body
/// that does not parse.
pub async fn fetch_stock() -> Result<Vec<StockRow>, String> {
    #[cfg(feature = "csr")]
    {
        get_json(gloo_net::http::Request::get(&endpoint(STOCK_PATH)), STOCK_PATH).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch all orders from `GET /api/orders`.
///
/// # Errors
///
/// Same as [`fetch_stock`].
pub async fn fetch_orders() -> Result<Vec<OrderRow>, String> {
    #[cfg(feature = "csr")]
    {
        get_json(gloo_net::http::Request::get(&endpoint(ORDERS_PATH)), ORDERS_PATH).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch all payments from `GET /api/payments`.
///
/// # Errors
///
/// Same as [`fetch_stock`].
pub async fn fetch_payments() -> Result<Vec<PaymentRow>, String> {
    #[cfg(feature = "csr")]
    {
        get_json(gloo_net::http::Request::get(&endpoint(PAYMENTS_PATH)), PAYMENTS_PATH).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch users matching `email` from `GET /api/users?email=`.
///
/// # Errors
///
/// Same as [`fetch_stock`].
pub async fn fetch_users_by_email(email: &str) -> Result<Vec<User>, String> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::get(&endpoint(USERS_PATH)).query([("email", email)]);
        get_json(request, USERS_PATH).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = email;
        Err("not available outside the browser".to_owned())
    }
}

/// Submit a product via `POST /api/products`.
///
/// Returns the HTTP status of any response the server sent; the caller
/// decides what counts as success.
///
/// # Errors
///
/// Returns an error string if the request could not be built or sent.
pub async fn create_product(product: &NewProduct) -> Result<u16, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(PRODUCTS_PATH))
            .json(product)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Ok(resp.status())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = product;
        Err("not available outside the browser".to_owned())
    }
}
