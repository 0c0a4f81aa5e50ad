//! Integration tests for the payroll dispatch engine.
//!
//! This test suite covers:
//! - Pay formulas for every supported kind, through the HTTP API
//! - Order and count of deliveries across a mixed roster
//! - Unsupported kinds and invalid records
//! - Paying the configured roster end to end

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_dispatch::api::{create_router, AppState};
use payroll_dispatch::config::ConfigLoader;
use payroll_dispatch::delivery::{ConsoleNotifier, RecordingNotifier};
use payroll_dispatch::error::PayrollError;
use payroll_dispatch::payable::{process_payroll, StandardEmployeeFactory};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/acme").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_payrun(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payrun")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn hourly(name: &str, hours: &str, rate: &str) -> Value {
    json!({ "name": name, "kind": "hourly", "hours": hours, "rate": rate })
}

fn commissioned(name: &str, base: &str, commission: &str) -> Value {
    json!({ "name": name, "kind": "commissioned", "base": base, "commission": commission })
}

fn salaried(name: &str, salary: &str) -> Value {
    json!({ "name": name, "kind": "salaried", "salary": salary })
}

fn assert_decimal_field(value: &Value, expected: &str) {
    let actual = decimal(value.as_str().unwrap());
    assert_eq!(
        actual.normalize(),
        decimal(expected).normalize(),
        "Expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// SECTION 1: Pay formulas
// =============================================================================

#[tokio::test]
async fn test_hourly_pays_hours_times_rate() {
    let (status, result) = post_payrun(
        create_router_for_test(),
        json!({ "records": [hourly("Ada", "160", "20")] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result["payrun"]["totals"]["gross_pay"], "3200");
    assert_eq!(result["payrun"]["payments"][0]["kind"], "hourly");
}

#[tokio::test]
async fn test_commissioned_pays_base_plus_commission() {
    let (status, result) = post_payrun(
        create_router_for_test(),
        json!({ "records": [commissioned("Linus", "3000", "1200")] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result["payrun"]["totals"]["gross_pay"], "4200");
}

#[tokio::test]
async fn test_salaried_pays_fixed_salary() {
    let (status, result) = post_payrun(
        create_router_for_test(),
        json!({ "records": [salaried("Grace", "5000")] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result["payrun"]["totals"]["gross_pay"], "5000");
}

#[tokio::test]
async fn test_fractional_amounts_are_exact() {
    // 37.5h * $31.17 = $1168.875
    let (status, result) = post_payrun(
        create_router_for_test(),
        json!({ "records": [hourly("Ada", "37.5", "31.17")] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result["payrun"]["payments"][0]["amount"], "1168.875");
}

// =============================================================================
// SECTION 2: Mixed rosters
// =============================================================================

#[tokio::test]
async fn test_mixed_roster_pays_each_record_in_order() {
    let (status, result) = post_payrun(
        create_router_for_test(),
        json!({
            "records": [
                salaried("Grace", "5000"),
                hourly("Ada", "160", "20"),
                commissioned("Linus", "3000", "1200"),
                hourly("Alan", "10", "45.50")
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let payments = result["payrun"]["payments"].as_array().unwrap();
    let names: Vec<&str> = payments.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Grace", "Ada", "Linus", "Alan"]);

    assert_decimal_field(&payments[3]["amount"], "455");
    assert_decimal_field(&result["payrun"]["totals"]["gross_pay"], "12855");
    assert_eq!(result["payrun"]["totals"]["payments_delivered"], 4);
    assert_eq!(result["payrun"]["totals"]["payments_skipped"], 0);
}

#[tokio::test]
async fn test_same_kind_records_do_not_share_state() {
    let (status, result) = post_payrun(
        create_router_for_test(),
        json!({
            "records": [
                hourly("First", "100", "10"),
                hourly("Second", "1", "1"),
                hourly("Third", "100", "10")
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let payments = result["payrun"]["payments"].as_array().unwrap();
    assert_decimal_field(&payments[0]["amount"], "1000");
    assert_decimal_field(&payments[1]["amount"], "1");
    assert_decimal_field(&payments[2]["amount"], "1000");
}

#[tokio::test]
async fn test_empty_roster_returns_zero_totals() {
    let (status, result) =
        post_payrun(create_router_for_test(), json!({ "records": [] })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["payrun"]["payments"].as_array().unwrap().is_empty());
    assert_decimal_field(&result["payrun"]["totals"]["gross_pay"], "0");
}

// =============================================================================
// SECTION 3: Error cases
// =============================================================================

#[tokio::test]
async fn test_unsupported_kind_rejects_whole_run() {
    let (status, result) = post_payrun(
        create_router_for_test(),
        json!({
            "records": [
                salaried("Grace", "5000"),
                { "name": "Eve", "kind": "volunteer" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "UNSUPPORTED_KIND");
    assert!(result["message"].as_str().unwrap().contains("volunteer"));
}

#[tokio::test]
async fn test_missing_amount_returns_invalid_record() {
    let (status, result) = post_payrun(
        create_router_for_test(),
        json!({ "records": [{ "name": "Ada", "kind": "hourly", "hours": "160" }] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_RECORD");
    assert!(result["message"].as_str().unwrap().contains("rate"));
}

#[tokio::test]
async fn test_negative_amount_returns_invalid_record() {
    let (status, result) = post_payrun(
        create_router_for_test(),
        json!({ "records": [salaried("Grace", "-1")] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_RECORD");
}

#[tokio::test]
async fn test_largest_representable_pay_is_delivered() {
    let (status, result) = post_payrun(
        create_router_for_test(),
        json!({ "records": [hourly("Max", "79228162514264337593543950335", "1")] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(
        &result["payrun"]["totals"]["gross_pay"],
        "79228162514264337593543950335",
    );
}

#[tokio::test]
async fn test_unrepresentable_pay_returns_invalid_record() {
    let (status, result) = post_payrun(
        create_router_for_test(),
        json!({ "records": [
            commissioned("Big", "79228162514264337593543950335", "1"),
        ] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_RECORD");
}

#[tokio::test]
async fn test_overflowing_gross_pay_rejects_run() {
    let (status, result) = post_payrun(
        create_router_for_test(),
        json!({ "records": [
            salaried("Grace", "79228162514264337593543950335"),
            salaried("Alan", "1"),
        ] }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "TOTAL_OVERFLOW");
    assert!(result["message"].as_str().unwrap().contains("Alan"));
}

#[tokio::test]
async fn test_missing_records_field_returns_validation_error() {
    let (status, result) = post_payrun(create_router_for_test(), json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

// =============================================================================
// SECTION 4: Configured roster
// =============================================================================

#[test]
fn test_configured_roster_pays_expected_totals() {
    let loader = ConfigLoader::load("./config/acme").unwrap();
    let mut notifier = RecordingNotifier::new();

    let result = process_payroll(loader.roster(), &StandardEmployeeFactory, &mut notifier).unwrap();

    assert_eq!(result.totals.gross_pay, decimal("12400"));
    assert_eq!(notifier.notices().len(), loader.roster().len());
}

#[test]
fn test_configured_roster_prints_one_line_per_payee() {
    let loader = ConfigLoader::load("./config/acme").unwrap();
    let mut notifier = ConsoleNotifier::new(Vec::new());

    process_payroll(loader.roster(), &StandardEmployeeFactory, &mut notifier).unwrap();

    let output = String::from_utf8(notifier.into_inner()).unwrap();
    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        vec![
            "Paid 3200 to Ada Lovelace (hourly)",
            "Paid 4200 to Linus Torvalds (commissioned)",
            "Paid 5000 to Grace Hopper (salaried)",
        ]
    );
}

#[test]
fn test_roster_with_unknown_kind_fails_when_paid() {
    let loader = ConfigLoader::load("./config/acme").unwrap();
    let mut records = loader.roster().to_vec();
    records.push(payroll_dispatch::models::PayRecord::new("Eve", "contractor"));
    let mut notifier = RecordingNotifier::new();

    let result = process_payroll(&records, &StandardEmployeeFactory, &mut notifier);

    assert!(matches!(result, Err(PayrollError::UnsupportedKind { .. })));
    assert_eq!(notifier.notices().len(), 3);
}
