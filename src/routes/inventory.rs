//! Inventory REST routes.
//!
//! Every listing returns the store's rows verbatim as a JSON array. Store
//! failures surface as a bare status code; details only go to the log.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::services::inventory::{
    InventoryError, NewProduct, OrderRow, PaymentRow, Product, ProductUpdate, StockRow, UserRow,
};
use crate::state::AppState;

pub const PRODUCT_CREATED_MESSAGE: &str = "Product added successfully!";
pub const PRODUCT_DELETED_MESSAGE: &str = "Product deleted";

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub email: Option<String>,
}

pub(crate) fn inventory_error_to_status(err: InventoryError) -> StatusCode {
    match err {
        InventoryError::Invalid(reason) => {
            warn!(%reason, "rejected inventory request");
            StatusCode::BAD_REQUEST
        }
        InventoryError::NotFound(product_id) => {
            info!(product_id, "product not found");
            StatusCode::NOT_FOUND
        }
        InventoryError::Database(e) => {
            error!(error = %e, "inventory query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /api/products` — list all products.
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, StatusCode> {
    let rows = state.store.list_products().await.map_err(inventory_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /api/products` — insert a product, answering 201 on success.
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<NewProduct>,
) -> Result<impl IntoResponse, StatusCode> {
    body.validate().map_err(inventory_error_to_status)?;
    let product_id = state
        .store
        .create_product(&body)
        .await
        .map_err(inventory_error_to_status)?;

    info!(product_id, product_name = %body.product_name, "product created");
    Ok((StatusCode::CREATED, Json(serde_json::json!({ "message": PRODUCT_CREATED_MESSAGE }))))
}

/// `GET /api/products/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<Json<Product>, StatusCode> {
    let product = state
        .store
        .get_product(product_id)
        .await
        .map_err(inventory_error_to_status)?;
    Ok(Json(product))
}

/// `PUT /api/products/{id}` — partial update, answering with the stored row.
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    Json(body): Json<ProductUpdate>,
) -> Result<Json<Product>, StatusCode> {
    body.validate().map_err(inventory_error_to_status)?;
    let product = state
        .store
        .update_product(product_id, &body)
        .await
        .map_err(inventory_error_to_status)?;

    info!(product_id, "product updated");
    Ok(Json(product))
}

/// `DELETE /api/products/{id}`
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    state
        .store
        .delete_product(product_id)
        .await
        .map_err(inventory_error_to_status)?;

    info!(product_id, "product deleted");
    Ok(Json(serde_json::json!({ "message": PRODUCT_DELETED_MESSAGE })))
}

/// `GET /api/stock` — stock rows joined with their product name.
pub async fn list_stock(State(state): State<AppState>) -> Result<Json<Vec<StockRow>>, StatusCode> {
    let rows = state.store.list_stock().await.map_err(inventory_error_to_status)?;
    Ok(Json(rows))
}

/// `GET /api/orders` — orders joined with product name and orderer email.
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<OrderRow>>, StatusCode> {
    let rows = state.store.list_orders().await.map_err(inventory_error_to_status)?;
    Ok(Json(rows))
}

/// `GET /api/payments`
pub async fn list_payments(State(state): State<AppState>) -> Result<Json<Vec<PaymentRow>>, StatusCode> {
    let rows = state.store.list_payments().await.map_err(inventory_error_to_status)?;
    Ok(Json(rows))
}

/// `GET /api/users?email=` — users, filtered by exact email when given.
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<UserRow>>, StatusCode> {
    let email = query.email.as_deref().map(str::trim).filter(|e| !e.is_empty());
    let rows = state.store.list_users(email).await.map_err(inventory_error_to_status)?;
    Ok(Json(rows))
}
