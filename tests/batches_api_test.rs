mod common;

use axum::http::{Method, StatusCode};
use chrono::{Duration, Months, NaiveDate, Utc};
use serde_json::{json, Value};

use common::{response_json, TestApp};

async fn seed_drug(app: &TestApp) -> i64 {
    let response = app
        .request(
            Method::POST,
            "/api/v1/drugs",
            Some(json!({
                "name": "Amoxicillin 500mg",
                "active_ingredient": "amoxicillin",
                "producer": "Kalbe",
                "category": "hard",
                "unit": "capsule",
                "purchase_price": 2000.0,
                "prescription_price": 3500.0,
                "general_price": 3000.0,
                "insurance_price": 2500.0,
                "barcode": null,
                "minimum_stock": 0,
                "storage_location": "A-3"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await["id"].as_i64().unwrap()
}

fn batch_payload(drug_id: i64, supplier_id: i32, expiration: NaiveDate, quantity: i32) -> Value {
    json!({
        "drug_id": drug_id,
        "batch_number": format!("AMX-{expiration}"),
        "expiration_date": expiration.to_string(),
        "quantity": quantity,
        "purchase_price": 1850.50,
        "supplier_id": supplier_id,
        "received_date": "2026-08-01"
    })
}

#[tokio::test]
async fn batch_round_trips_numeric_and_date_fields() {
    let app = TestApp::new().await;
    let supplier_id = app.seed_supplier("PT Sumber Obat").await;
    let drug_id = seed_drug(&app).await;

    let expiration = NaiveDate::from_ymd_opt(2027, 3, 15).unwrap();
    let response = app
        .request(
            Method::POST,
            "/api/v1/batches",
            Some(batch_payload(drug_id, supplier_id, expiration, 40)),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_json(response).await;
    let batch_id = created["id"].as_i64().unwrap();
    assert!(batch_id > 0);

    let response = app
        .request(Method::GET, &format!("/api/v1/batches/{batch_id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = response_json(response).await;
    assert_eq!(fetched["quantity"], 40);
    // Decimal column comes back as a number, dates as ISO strings
    assert_eq!(fetched["purchase_price"].as_f64(), Some(1850.50));
    assert_eq!(fetched["expiration_date"], "2027-03-15");
    assert_eq!(fetched["received_date"], "2026-08-01");
}

#[tokio::test]
async fn missing_batch_is_a_404() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/v1/batches/9999", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn batches_by_drug_sort_by_expiration_ascending() {
    let app = TestApp::new().await;
    let supplier_id = app.seed_supplier("PT Sumber Obat").await;
    let drug_id = seed_drug(&app).await;

    for (year, month) in [(2028, 6), (2027, 1), (2027, 9)] {
        let expiration = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let response = app
            .request(
                Method::POST,
                "/api/v1/batches",
                Some(batch_payload(drug_id, supplier_id, expiration, 10)),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .request(Method::GET, &format!("/api/v1/drugs/{drug_id}/batches"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let batches = response_json(response).await;
    let expirations: Vec<&str> = batches
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["expiration_date"].as_str().unwrap())
        .collect();
    assert_eq!(expirations, vec!["2027-01-01", "2027-09-01", "2028-06-01"]);
}

#[tokio::test]
async fn expiring_window_is_inclusive_on_both_ends() {
    let app = TestApp::new().await;
    let supplier_id = app.seed_supplier("PT Sumber Obat").await;
    let drug_id = seed_drug(&app).await;

    let today = Utc::now().date_naive();
    let window_end = today.checked_add_months(Months::new(6)).unwrap();

    let in_window = [today, window_end];
    let out_of_window = [today - Duration::days(1), window_end + Duration::days(1)];

    for expiration in in_window.iter().chain(out_of_window.iter()) {
        let response = app
            .request(
                Method::POST,
                "/api/v1/batches",
                Some(batch_payload(drug_id, supplier_id, *expiration, 5)),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.request(Method::GET, "/api/v1/batches/expiring", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let expiring = response_json(response).await;
    let dates: Vec<&str> = expiring
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["expiration_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec![today.to_string(), window_end.to_string()]);
}

#[tokio::test]
async fn expiring_window_honours_months_ahead_parameter() {
    let app = TestApp::new().await;
    let supplier_id = app.seed_supplier("PT Sumber Obat").await;
    let drug_id = seed_drug(&app).await;

    let today = Utc::now().date_naive();
    let next_month = today.checked_add_months(Months::new(1)).unwrap();
    let in_three_months = today.checked_add_months(Months::new(3)).unwrap();

    for expiration in [next_month, in_three_months] {
        let response = app
            .request(
                Method::POST,
                "/api/v1/batches",
                Some(batch_payload(drug_id, supplier_id, expiration, 5)),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .request(Method::GET, "/api/v1/batches/expiring?months_ahead=2", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let expiring = response_json(response).await;
    let dates: Vec<&str> = expiring
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["expiration_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec![next_month.to_string()]);
}

#[tokio::test]
async fn batch_for_unknown_drug_conflicts() {
    let app = TestApp::new().await;
    let supplier_id = app.seed_supplier("PT Sumber Obat").await;

    let expiration = NaiveDate::from_ymd_opt(2027, 3, 15).unwrap();
    let response = app
        .request(
            Method::POST,
            "/api/v1/batches",
            Some(batch_payload(4242, supplier_id, expiration, 10)),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn batch_quantity_must_be_positive() {
    let app = TestApp::new().await;
    let supplier_id = app.seed_supplier("PT Sumber Obat").await;
    let drug_id = seed_drug(&app).await;

    let expiration = NaiveDate::from_ymd_opt(2027, 3, 15).unwrap();
    let mut payload = batch_payload(drug_id, supplier_id, expiration, 10);
    payload["quantity"] = json!(0);

    let response = app.request(Method::POST, "/api/v1/batches", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
