//! Integration tests for the severance and benefit estimation engine.
//!
//! This test suite drives the HTTP router end to end and covers:
//! - Severance for every termination category, with and without caps
//! - Pre-reform tenure, stated and derived from dates
//! - Annual salary mode
//! - Benefit duration, tiers and household limits
//! - Net benefit deductions
//! - Input coercion and warnings
//! - Error cases and the rules endpoint

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use finiquito_engine::api::{AppState, create_router};
use finiquito_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/es").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn calculate_ok(body: Value) -> Value {
    let (status, result) = post_calculate(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK, "unexpected response: {result}");
    result
}

fn assert_amount(value: &Value, expected: &str) {
    let actual = value
        .as_str()
        .unwrap_or_else(|| panic!("expected a decimal string, got {value}"));
    assert_eq!(decimal(actual), decimal(expected), "amount mismatch");
}

fn severance_request(termination_type: &str, salary: u32, years: u32, months: u32) -> Value {
    json!({
        "termination_type": termination_type,
        "monthly_gross_salary": salary,
        "tenure_years": years,
        "tenure_months": months
    })
}

fn benefit_request(base: u32, contribution_days: u32, children: u32) -> Value {
    json!({
        "regulatory_base_salary": base,
        "contribution_days": contribution_days,
        "dependent_children": children
    })
}

fn warning_codes(result: &Value) -> Vec<String> {
    result["audit_trace"]["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["code"].as_str().unwrap().to_string())
        .collect()
}

fn find_step<'a>(result: &'a Value, rule_id: &str) -> &'a Value {
    result["audit_trace"]["steps"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["rule_id"] == rule_id)
        .unwrap_or_else(|| panic!("no audit step with rule_id {rule_id}"))
}

// =============================================================================
// SECTION 1: Severance
// =============================================================================

#[tokio::test]
async fn test_unjustified_dismissal_post_reform_only() {
    let result = calculate_ok(severance_request("ordinary-unjustified", 2200, 4, 6)).await;

    assert_amount(&result["severance"], "10890.00");
    assert_eq!(result["termination_type"], "ordinary-unjustified");
    assert!(result.get("unrecognised_termination_type").is_none());
}

#[tokio::test]
async fn test_spanish_termination_code_matches_english() {
    let result = calculate_ok(severance_request("improcedente", 2200, 4, 6)).await;
    assert_amount(&result["severance"], "10890.00");
    assert_eq!(result["termination_type"], "ordinary-unjustified");
}

#[tokio::test]
async fn test_missing_termination_type_defaults_to_unjustified() {
    let result = calculate_ok(json!({
        "monthly_gross_salary": 2200,
        "tenure_years": 4,
        "tenure_months": 6
    }))
    .await;
    assert_amount(&result["severance"], "10890.00");
    assert!(warning_codes(&result).is_empty());
}

#[tokio::test]
async fn test_unjustified_dismissal_with_pre_reform_tenure() {
    // daily 60: 5.5 years x 45 days + 9.5 years x 33 days
    let mut body = severance_request("ordinary-unjustified", 1800, 15, 0);
    body["pre_cutover_tenure"] = json!({"years": 5, "months": 6});

    let result = calculate_ok(body).await;
    assert_amount(&result["severance"], "33660.00");
}

#[tokio::test]
async fn test_unjustified_dismissal_is_capped_at_24_months() {
    let result = calculate_ok(severance_request("ordinary-unjustified", 3000, 40, 0)).await;
    assert_amount(&result["severance"], "72000.00");

    let step = find_step(&result, "severance");
    assert_eq!(step["output"]["cap_applied"], true);
}

#[tokio::test]
async fn test_objective_dismissal() {
    let result = calculate_ok(severance_request("objective-cause", 1500, 3, 0)).await;
    assert_amount(&result["severance"], "3000.00");
}

#[tokio::test]
async fn test_objective_dismissal_is_capped_at_12_months() {
    let result = calculate_ok(severance_request("objetivo", 1500, 25, 0)).await;
    assert_amount(&result["severance"], "18000.00");
}

#[tokio::test]
async fn test_contract_expiry_is_uncapped() {
    let result = calculate_ok(severance_request("contract-expiry", 1500, 3, 0)).await;
    assert_amount(&result["severance"], "1800.00");

    let result = calculate_ok(severance_request("fin-contrato", 1500, 50, 0)).await;
    assert_amount(&result["severance"], "30000.00");
}

#[tokio::test]
async fn test_voluntary_leave_pays_nothing() {
    let result = calculate_ok(severance_request("voluntary-leave", 5000, 30, 0)).await;
    assert_amount(&result["severance"], "0");
}

#[tokio::test]
async fn test_unknown_termination_type_pays_nothing_with_warning() {
    let result = calculate_ok(severance_request("disciplinario", 2200, 4, 6)).await;
    assert_amount(&result["severance"], "0");
    assert_eq!(result["termination_type"], "voluntary-leave");
    assert_eq!(result["unrecognised_termination_type"], "disciplinario");
    assert_eq!(warning_codes(&result), vec!["UNRECOGNISED_TERMINATION_TYPE"]);
}

#[tokio::test]
async fn test_annual_salary_mode() {
    let result = calculate_ok(json!({
        "salary_mode": "annual",
        "annual_gross_salary": 30800,
        "payments_per_year": 14,
        "tenure_years": 4,
        "tenure_months": 6
    }))
    .await;

    assert_amount(&result["severance"], "10890.00");
    let step = find_step(&result, "monthly_salary");
    assert_eq!(step["output"]["monthly_gross_salary"], "2200.00");
}

#[tokio::test]
async fn test_tenure_derived_from_dates() {
    // 14y6m in total, of which 2y6m before 2012-02-12
    let result = calculate_ok(json!({
        "monthly_gross_salary": 1800,
        "tenure_years": 1,
        "employment_start_date": "2009-08-12",
        "termination_date": "2024-02-12"
    }))
    .await;

    assert_amount(&result["severance"], "30510.00");
    let step = find_step(&result, "tenure");
    assert_eq!(step["input"]["source"], "dates");
    assert_eq!(step["output"]["tenure"]["years"], 14);
}

#[tokio::test]
async fn test_reversed_dates_fall_back_to_stated_tenure() {
    let result = calculate_ok(json!({
        "monthly_gross_salary": 2200,
        "tenure_years": 4,
        "tenure_months": 6,
        "employment_start_date": "2024-02-12",
        "termination_date": "2009-08-12"
    }))
    .await;

    assert_amount(&result["severance"], "10890.00");
    assert_eq!(warning_codes(&result), vec!["TENURE_DATES_IGNORED"]);
}

// =============================================================================
// SECTION 2: Unemployment Benefit
// =============================================================================

#[tokio::test]
async fn test_benefit_with_both_tiers_at_maximum() {
    let result = calculate_ok(benefit_request(2200, 1320, 0)).await;
    let benefit = &result["benefit"];

    assert_eq!(benefit["duration_days"], 420);
    assert_amount(&benefit["tier1_months"], "6.00");
    assert_amount(&benefit["tier2_months"], "8.00");
    assert_amount(&benefit["tier1_monthly_amount"], "1225.00");
    assert_amount(&benefit["tier2_monthly_amount"], "1225.00");
    assert_amount(&benefit["total_estimated"], "17150.00");
}

#[tokio::test]
async fn test_benefit_below_minimum_contribution_is_zero() {
    let result = calculate_ok(benefit_request(2200, 300, 0)).await;
    let benefit = &result["benefit"];

    assert_eq!(benefit["duration_days"], 0);
    assert_amount(&benefit["tier1_months"], "0");
    assert_amount(&benefit["tier2_months"], "0");
    assert_amount(&benefit["tier1_monthly_amount"], "0");
    assert_amount(&benefit["tier2_monthly_amount"], "0");
    assert_amount(&benefit["total_estimated"], "0");
    assert_amount(&result["net_benefit"]["total_net"], "0");
}

#[tokio::test]
async fn test_benefit_with_one_child_is_raised_to_minimum() {
    // 70% and 60% of 1000 both fall below the 749.00 floor
    let result = calculate_ok(benefit_request(1000, 720, 1)).await;
    let benefit = &result["benefit"];

    assert_eq!(benefit["duration_days"], 240);
    assert_amount(&benefit["tier1_monthly_amount"], "749.00");
    assert_amount(&benefit["tier2_monthly_amount"], "749.00");
    assert_amount(&benefit["tier2_months"], "2.00");
    assert_amount(&benefit["total_estimated"], "5992.00");
}

#[tokio::test]
async fn test_benefit_maximum_rises_with_children() {
    let none = calculate_ok(benefit_request(4000, 2160, 0)).await;
    let one = calculate_ok(benefit_request(4000, 2160, 1)).await;
    let two = calculate_ok(benefit_request(4000, 2160, 3)).await;

    assert_eq!(none["benefit"]["duration_days"], 720);
    assert_amount(&none["benefit"]["tier1_monthly_amount"], "1225.00");
    assert_amount(&one["benefit"]["tier1_monthly_amount"], "1400.00");
    assert_amount(&two["benefit"]["tier1_monthly_amount"], "1575.00");
}

#[tokio::test]
async fn test_zero_base_is_clamped_to_minimum() {
    let result = calculate_ok(benefit_request(0, 360, 0)).await;
    let benefit = &result["benefit"];

    assert_eq!(benefit["duration_days"], 120);
    assert_amount(&benefit["tier1_monthly_amount"], "560.00");
    assert_amount(&benefit["tier1_months"], "4.00");
    assert_amount(&benefit["tier2_months"], "0");
    assert_amount(&benefit["total_estimated"], "2240.00");
}

#[tokio::test]
async fn test_benefit_audit_steps_cite_the_law() {
    let result = calculate_ok(benefit_request(2200, 1320, 0)).await;

    assert_eq!(find_step(&result, "benefit_duration")["legal_ref"], "LGSS art. 269.1");
    assert_eq!(find_step(&result, "benefit_limits")["legal_ref"], "LGSS art. 270.3");
    assert_eq!(find_step(&result, "benefit_tiers")["legal_ref"], "LGSS art. 270.2");
}

// =============================================================================
// SECTION 3: Net Benefit
// =============================================================================

#[tokio::test]
async fn test_net_benefit_uses_configured_deductions() {
    let result = calculate_ok(benefit_request(2200, 1320, 0)).await;
    let net = &result["net_benefit"];

    assert_amount(&net["deductions"]["income_tax_withholding_percent"], "2");
    assert_amount(&net["deductions"]["social_security_percent"], "4.7");
    assert_amount(&net["tier1_monthly_net"], "1142.93");
    assert_amount(&net["tier2_monthly_net"], "1142.93");
    assert_amount(&net["total_net"], "16000.95");
}

#[tokio::test]
async fn test_net_benefit_with_requested_deductions() {
    let mut body = benefit_request(2200, 1320, 0);
    body["income_tax_withholding_percent"] = json!("10");
    body["social_security_percent"] = json!(0);

    let result = calculate_ok(body).await;
    let net = &result["net_benefit"];

    assert_amount(&net["tier1_monthly_net"], "1102.50");
    assert_amount(&net["total_net"], "15435.00");
}

// =============================================================================
// SECTION 4: Coercion and Response Shape
// =============================================================================

#[tokio::test]
async fn test_empty_request_returns_zero_severance_and_no_benefit() {
    let result = calculate_ok(json!({})).await;

    assert_amount(&result["severance"], "0");
    assert_eq!(result["benefit"]["duration_days"], 0);
    assert!(warning_codes(&result).is_empty());
}

#[tokio::test]
async fn test_form_strings_are_coerced() {
    let result = calculate_ok(json!({
        "monthly_gross_salary": "2200",
        "tenure_years": "4",
        "tenure_months": "6",
        "regulatory_base_salary": "",
        "contribution_days": "abc"
    }))
    .await;

    assert_amount(&result["severance"], "10890.00");
    assert_eq!(result["benefit"]["duration_days"], 0);
    assert_eq!(warning_codes(&result), vec!["NON_NUMERIC_FIELD"]);
}

#[tokio::test]
async fn test_negative_salary_is_clamped_with_warning() {
    let result = calculate_ok(severance_request("ordinary-unjustified", 0, 4, 6)).await;
    assert_amount(&result["severance"], "0");

    let result = calculate_ok(json!({
        "monthly_gross_salary": -2200,
        "tenure_years": 4
    }))
    .await;
    assert_amount(&result["severance"], "0");
    assert_eq!(warning_codes(&result), vec!["NEGATIVE_FIELD_CLAMPED"]);
}

#[tokio::test]
async fn test_response_carries_audit_metadata() {
    let result = calculate_ok(severance_request("ordinary-unjustified", 2200, 4, 6)).await;

    assert!(result["calculation_id"].is_string());
    assert!(result["timestamp"].is_string());
    assert_eq!(result["engine_version"], env!("CARGO_PKG_VERSION"));
    assert!(
        result["disclaimer"]
            .as_str()
            .unwrap()
            .contains("SEPE")
    );

    let severance_step = find_step(&result, "severance");
    assert_eq!(severance_step["legal_ref"], "ET art. 56.1; Ley 3/2012 DT 11ª");
    assert!(
        severance_step["reasoning"]
            .as_str()
            .unwrap()
            .contains("10.890,00\u{a0}€")
    );
}

#[tokio::test]
async fn test_identical_requests_give_identical_figures() {
    let body = json!({
        "termination_type": "objective-cause",
        "monthly_gross_salary": "1937.45",
        "tenure_years": 7,
        "tenure_months": 5,
        "regulatory_base_salary": 1710.2,
        "contribution_days": 1555,
        "dependent_children": 2
    });

    let first = calculate_ok(body.clone()).await;
    let second = calculate_ok(body).await;

    assert_eq!(first["severance"], second["severance"]);
    assert_eq!(first["benefit"], second["benefit"]);
    assert_eq!(first["net_benefit"], second["net_benefit"]);
    assert_ne!(first["calculation_id"], second["calculation_id"]);
}

// =============================================================================
// SECTION 5: Error Cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let (status, error) = send(
        create_router_for_test(),
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("Content-Type", "application/json")
            .body(Body::from("{\"monthly_gross_salary\": "))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
    assert!(error["error"].is_string());
}

#[tokio::test]
async fn test_non_object_body_returns_400() {
    let (status, error) = post_calculate(create_router_for_test(), json!("hello")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let (status, error) = send(
        create_router_for_test(),
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .body(Body::from("{}"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_object_where_number_expected_returns_calculation_error() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        json!({ "monthly_gross_salary": {"amount": 2200} }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "CALCULATION_ERROR");
    assert!(
        error["detail"]
            .as_str()
            .unwrap()
            .contains("monthly_gross_salary")
    );
}

#[tokio::test]
async fn test_out_of_range_salary_returns_calculation_error() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        json!({ "monthly_gross_salary": 1e15 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "CALCULATION_ERROR");
}

#[tokio::test]
async fn test_oversized_counts_are_clamped_not_rejected() {
    let result = calculate_ok(json!({
        "regulatory_base_salary": 4000,
        "contribution_days": 40000,
        "dependent_children": 150
    }))
    .await;
    let benefit = &result["benefit"];

    assert_eq!(benefit["duration_days"], 720);
    assert_amount(&benefit["tier1_monthly_amount"], "1575.00");
    assert_amount(&benefit["tier2_months"], "18.00");
    assert_amount(&benefit["total_estimated"], "37800.00");
    assert_eq!(
        warning_codes(&result),
        vec!["OVERSIZED_FIELD_CLAMPED", "OVERSIZED_FIELD_CLAMPED"]
    );
}

#[tokio::test]
async fn test_tiny_salary_reads_as_zero() {
    let result = calculate_ok(json!({
        "monthly_gross_salary": 1e-30,
        "tenure_years": 5
    }))
    .await;

    assert_amount(&result["severance"], "0");
    assert!(warning_codes(&result).is_empty());
}

#[tokio::test]
async fn test_non_post_methods_return_405() {
    for method in ["GET", "PUT", "DELETE", "PATCH"] {
        let (status, error) = send(
            create_router_for_test(),
            Request::builder()
                .method(method)
                .uri("/calculate")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "method {method}");
        assert_eq!(error["code"], "METHOD_NOT_ALLOWED");
    }
}

// =============================================================================
// SECTION 6: Rules Endpoint
// =============================================================================

#[tokio::test]
async fn test_rules_endpoint_lists_statutory_figures() {
    let (status, rules) = send(
        create_router_for_test(),
        Request::builder()
            .method("GET")
            .uri("/rules")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rules["calculator"]["code"], "ES-2025");
    assert_eq!(rules["legal_cutover_date"], "2012-02-12");
    assert_eq!(rules["severance"].as_array().unwrap().len(), 4);
    assert_eq!(rules["benefit"]["lookback_years"], 6);
    assert_eq!(rules["benefit"]["tier1_max_days"], 180);

    let table = rules["benefit"]["duration_table"].as_array().unwrap();
    assert_eq!(table.len(), 11);
    assert_eq!(table[0]["min_contribution_days"], 360);
    assert_eq!(table[10]["max_contribution_days"], Value::Null);
}
