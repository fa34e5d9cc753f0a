#![allow(dead_code)]

use std::sync::Arc;

use apotek_api::{
    config::AppConfig,
    db,
    entities::{supplier, user},
    AppState,
};
use axum::{
    body::{self, Body},
    http::{header, Method, Request},
    response::Response,
    Router,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// Helper harness for spinning up an application backed by a throwaway
/// SQLite database.
pub struct TestApp {
    router: Router,
    pub state: Arc<AppState>,
    _db_dir: TempDir,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let db_dir = tempfile::tempdir().expect("create temp dir for test database");
        let db_path = db_dir.path().join("apotek_test.db");

        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_path.display()),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.auto_migrate = true;
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");

        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = Arc::new(AppState::new(Arc::new(pool), cfg));
        let router = Router::new()
            .nest("/api/v1", apotek_api::api_v1_routes())
            .with_state(state.clone());

        Self {
            router,
            state,
            _db_dir: db_dir,
        }
    }

    /// Issue one request against the in-process router.
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("build request"),
            None => builder.body(Body::empty()).expect("build request"),
        };

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router response")
    }

    /// Insert a staff account to act as cashier / record creator.
    pub async fn seed_cashier(&self, username: &str) -> i32 {
        let cashier = user::ActiveModel {
            username: Set(username.to_string()),
            full_name: Set("Test Cashier".to_string()),
            password_hash: Set("not-a-real-hash".to_string()),
            role: Set("cashier".to_string()),
            is_active: Set(true),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.state.db.as_ref())
        .await
        .expect("create cashier");

        cashier.id
    }

    /// Insert a supplier for batches / purchase orders.
    pub async fn seed_supplier(&self, name: &str) -> i32 {
        let supplier = supplier::ActiveModel {
            name: Set(name.to_string()),
            contact_person: Set(None),
            phone: Set(None),
            email: Set(None),
            address: Set(None),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.state.db.as_ref())
        .await
        .expect("create supplier");

        supplier.id
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}
