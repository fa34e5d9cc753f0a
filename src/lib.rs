//! Apotek API Library
//!
//! Pharmacy point-of-sale and inventory backend: drug catalog, batch-level
//! stock, checkout transactions, procurement and expense records.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod services;

use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

impl AppState {
    /// Build app state over an established pool.
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let services = handlers::AppServices::new(db.clone());
        Self {
            db,
            config,
            services,
        }
    }
}

/// Full v1 API surface
pub fn api_v1_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/drugs", handlers::drugs::drug_routes())
        .nest("/batches", handlers::batches::batch_routes())
        .nest("/suppliers", handlers::suppliers::supplier_routes())
        .nest("/customers", handlers::customers::customer_routes())
        .nest("/transactions", handlers::transactions::transaction_routes())
        .nest(
            "/purchase-orders",
            handlers::purchase_orders::purchase_order_routes(),
        )
        .nest("/expenses", handlers::expenses::expense_routes())
        .nest("/reports", handlers::reports::report_routes())
        .route("/health", get(handlers::health::healthcheck))
}
