mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::{response_json, TestApp};

async fn seed_drug_with_batch(app: &TestApp, quantity: i32) -> (i64, i64) {
    let supplier_id = app.seed_supplier("PT Sumber Obat").await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/drugs",
            Some(json!({
                "name": "Panadol 500mg",
                "active_ingredient": "paracetamol",
                "producer": "Kimia Farma",
                "category": "free",
                "unit": "tablet",
                "purchase_price": 1000.0,
                "prescription_price": 1800.0,
                "general_price": 1500.0,
                "insurance_price": 1200.0,
                "barcode": null,
                "minimum_stock": 0,
                "storage_location": null
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let drug_id = response_json(response).await["id"].as_i64().unwrap();

    let response = app
        .request(
            Method::POST,
            "/api/v1/batches",
            Some(json!({
                "drug_id": drug_id,
                "batch_number": "PND-001",
                "expiration_date": "2030-01-01",
                "quantity": quantity,
                "purchase_price": 900.0,
                "supplier_id": supplier_id,
                "received_date": "2026-08-01"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let batch_id = response_json(response).await["id"].as_i64().unwrap();

    (drug_id, batch_id)
}

fn transaction_payload(cashier_id: i32) -> Value {
    json!({
        "type": "non_prescription",
        "customer_id": null,
        "doctor_name": null,
        "patient_name": null,
        "subtotal": 15000.0,
        "discount_amount": 0.0,
        "total_amount": 15000.0,
        "payment_method": "cash",
        "cashier_id": cashier_id
    })
}

async fn create_transaction(app: &TestApp, cashier_id: i32) -> i64 {
    let response = app
        .request(
            Method::POST,
            "/api/v1/transactions",
            Some(transaction_payload(cashier_id)),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await["id"].as_i64().unwrap()
}

async fn batch_quantity(app: &TestApp, batch_id: i64) -> i64 {
    let response = app
        .request(Method::GET, &format!("/api/v1/batches/{batch_id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    response_json(response).await["quantity"].as_i64().unwrap()
}

#[tokio::test]
async fn checkout_returns_the_persisted_transaction() {
    let app = TestApp::new().await;
    let cashier_id = app.seed_cashier("sari").await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/transactions",
            Some(transaction_payload(cashier_id)),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_json(response).await;

    assert!(created["id"].as_i64().unwrap() > 0);
    assert!(created["transaction_number"]
        .as_str()
        .unwrap()
        .starts_with("TXN-"));
    assert_eq!(created["type"], "non_prescription");
    assert_eq!(created["payment_method"], "cash");
    assert_eq!(created["total_amount"].as_f64(), Some(15000.0));
    assert!(created["transaction_date"].is_string());
}

#[tokio::test]
async fn prescription_checkout_keeps_doctor_and_patient() {
    let app = TestApp::new().await;
    let cashier_id = app.seed_cashier("sari").await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/transactions",
            Some(json!({
                "type": "prescription",
                "customer_id": null,
                "doctor_name": "dr. Wijaya",
                "patient_name": "Budi Santoso",
                "subtotal": 42000.0,
                "discount_amount": 2000.0,
                "total_amount": 40000.0,
                "payment_method": "qris",
                "cashier_id": cashier_id
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_json(response).await;
    assert_eq!(created["type"], "prescription");
    assert_eq!(created["doctor_name"], "dr. Wijaya");
    assert_eq!(created["patient_name"], "Budi Santoso");
}

#[tokio::test]
async fn unknown_cashier_or_customer_fails_with_404() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/transactions",
            Some(transaction_payload(777)),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let cashier_id = app.seed_cashier("sari").await;
    let mut payload = transaction_payload(cashier_id);
    payload["customer_id"] = json!(888);
    let response = app
        .request(Method::POST, "/api/v1/transactions", Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sale_line_deducts_exactly_its_quantity() {
    let app = TestApp::new().await;
    let cashier_id = app.seed_cashier("sari").await;
    let (drug_id, batch_id) = seed_drug_with_batch(&app, 30).await;
    let transaction_id = create_transaction(&app, cashier_id).await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/transactions/{transaction_id}/items"),
            Some(json!({
                "drug_id": drug_id,
                "batch_id": batch_id,
                "quantity": 10,
                "unit_price": 1500.0,
                "discount_amount": 0.0,
                "subtotal": 15000.0
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let item = response_json(response).await;
    assert!(item["id"].as_i64().unwrap() > 0);
    assert_eq!(item["transaction_id"].as_i64(), Some(transaction_id));
    assert_eq!(item["quantity"], 10);
    assert_eq!(item["unit_price"].as_f64(), Some(1500.0));
    assert!(item["created_at"].is_string());

    assert_eq!(batch_quantity(&app, batch_id).await, 20);
}

#[tokio::test]
async fn overselling_is_rejected_without_mutation() {
    let app = TestApp::new().await;
    let cashier_id = app.seed_cashier("sari").await;
    let (drug_id, batch_id) = seed_drug_with_batch(&app, 5).await;
    let transaction_id = create_transaction(&app, cashier_id).await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/transactions/{transaction_id}/items"),
            Some(json!({
                "drug_id": drug_id,
                "batch_id": batch_id,
                "quantity": 6,
                "unit_price": 1500.0,
                "discount_amount": 0.0,
                "subtotal": 9000.0
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing moved: same stock, no stored line item
    assert_eq!(batch_quantity(&app, batch_id).await, 5);
}

#[tokio::test]
async fn selling_the_whole_batch_leaves_zero_not_negative() {
    let app = TestApp::new().await;
    let cashier_id = app.seed_cashier("sari").await;
    let (drug_id, batch_id) = seed_drug_with_batch(&app, 5).await;
    let transaction_id = create_transaction(&app, cashier_id).await;

    let item = json!({
        "drug_id": drug_id,
        "batch_id": batch_id,
        "quantity": 5,
        "unit_price": 1500.0,
        "discount_amount": 0.0,
        "subtotal": 7500.0
    });

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/transactions/{transaction_id}/items"),
            Some(item.clone()),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(batch_quantity(&app, batch_id).await, 0);

    // The batch is now dry; one more unit must not go through
    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/transactions/{transaction_id}/items"),
            Some(item),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(batch_quantity(&app, batch_id).await, 0);
}

#[tokio::test]
async fn sale_line_against_missing_batch_is_a_404() {
    let app = TestApp::new().await;
    let cashier_id = app.seed_cashier("sari").await;
    let transaction_id = create_transaction(&app, cashier_id).await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/transactions/{transaction_id}/items"),
            Some(json!({
                "drug_id": 1,
                "batch_id": 4242,
                "quantity": 1,
                "unit_price": 1500.0,
                "discount_amount": 0.0,
                "subtotal": 1500.0
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sale_line_quantity_must_be_positive() {
    let app = TestApp::new().await;
    let cashier_id = app.seed_cashier("sari").await;
    let (drug_id, batch_id) = seed_drug_with_batch(&app, 5).await;
    let transaction_id = create_transaction(&app, cashier_id).await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/transactions/{transaction_id}/items"),
            Some(json!({
                "drug_id": drug_id,
                "batch_id": batch_id,
                "quantity": 0,
                "unit_price": 1500.0,
                "discount_amount": 0.0,
                "subtotal": 1500.0
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(batch_quantity(&app, batch_id).await, 5);
}
