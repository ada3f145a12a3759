//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the inventory JSON API under `/api`, a plain-text banner at `/`, and
//! optionally the built dashboard as a static fallback. CORS is wide open
//! because the dashboard is usually served from a different origin.

pub mod inventory;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const BANNER: &str = "Inventory System Backend Connected Successfully!";

/// Inventory API routes.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(banner))
        .route("/healthz", get(healthz))
        .route("/api/users", get(inventory::list_users))
        .route(
            "/api/products",
            get(inventory::list_products).post(inventory::create_product),
        )
        .route(
            "/api/products/{id}",
            get(inventory::get_product)
                .put(inventory::update_product)
                .delete(inventory::delete_product),
        )
        .route("/api/stock", get(inventory::list_stock))
        .route("/api/orders", get(inventory::list_orders))
        .route("/api/payments", get(inventory::list_payments))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes plus the built dashboard served from `static_dir`.
pub fn app_with_static(state: AppState, static_dir: &Path) -> Router {
    let dashboard = ServeDir::new(static_dir).append_index_html_on_directories(true);
    app(state).fallback_service(dashboard)
}

async fn banner() -> &'static str {
    BANNER
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
