//! Integration tests for the Settlement Comparator HTTP API.
//!
//! This test suite covers:
//! - The reference comparison and a short-tenure comparison
//! - Input coercion (pt-BR amounts, numeric amounts, default exit date)
//! - Document export headers and pagination
//! - Share link layout
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use settlement_comparator::api::{AppState, create_router};
use settlement_comparator::config::{ComparatorConfig, ConfigLoader};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn post_request(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(post_request(uri, body.to_string()))
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn reference_request() -> Value {
    json!({
        "gross_monthly_salary": "3000",
        "severance_fund_balance": "15000",
        "hire_date": "2020-01-01",
        "exit_date": "2024-01-01",
        "reason": "wage_delay"
    })
}

fn assert_amount(report: &Value, pointer: &str, expected: &str) {
    let raw = report
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("missing {} in {}", pointer, report));
    assert_eq!(
        decimal(raw),
        decimal(expected),
        "{}: expected {}, got {}",
        pointer,
        expected,
        raw
    );
}

// =============================================================================
// SECTION 1: Comparisons
// =============================================================================

#[tokio::test]
async fn test_reference_comparison() {
    let (status, report) = post_json(create_router_for_test(), "/compare", reference_request()).await;
    assert_eq!(status, StatusCode::OK);

    assert_amount(&report, "/result/resignation/accrued_salary", "3000");
    assert_amount(&report, "/result/resignation/proportional_thirteenth_pay", "0");
    assert_amount(&report, "/result/resignation/vacation_accrual", "4000");
    assert_amount(&report, "/result/resignation/notice_pay_in_lieu", "0");
    assert_amount(&report, "/result/resignation/fund_exit_penalty", "0");
    assert_amount(&report, "/result/resignation/fund_withdrawal", "0");
    assert_amount(&report, "/result/resignation/total", "7000");

    assert_amount(&report, "/result/indirect_termination/notice_pay_in_lieu", "4200");
    assert_amount(&report, "/result/indirect_termination/fund_exit_penalty", "6000");
    assert_amount(&report, "/result/indirect_termination/fund_withdrawal", "15000");
    assert_amount(&report, "/result/indirect_termination/total", "32200");

    assert_amount(&report, "/result/difference", "25200");
}

#[tokio::test]
async fn test_short_tenure_comparison() {
    // 183 days: 0 years, 6 months; August 31 is day 242 of the year, so 9 months.
    let body = json!({
        "gross_monthly_salary": "2400",
        "severance_fund_balance": "0",
        "hire_date": "2023-03-01",
        "exit_date": "2023-08-31",
        "reason": "harassment"
    });

    let (status, report) = post_json(create_router_for_test(), "/compare", body).await;
    assert_eq!(status, StatusCode::OK);

    assert_amount(&report, "/result/resignation/proportional_thirteenth_pay", "1800");
    assert_amount(&report, "/result/resignation/vacation_accrual", "1600");
    assert_amount(&report, "/result/resignation/total", "5800");
    assert_amount(&report, "/result/indirect_termination/notice_pay_in_lieu", "2400");
    assert_amount(&report, "/result/indirect_termination/total", "8200");
    assert_amount(&report, "/result/difference", "2400");
}

#[tokio::test]
async fn test_zero_amounts_yield_zero_totals() {
    let body = json!({
        "gross_monthly_salary": "0",
        "severance_fund_balance": "0",
        "hire_date": "2019-05-10",
        "exit_date": "2024-11-20",
        "reason": "voluntary_exit"
    });

    let (status, report) = post_json(create_router_for_test(), "/compare", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_amount(&report, "/result/resignation/total", "0");
    assert_amount(&report, "/result/indirect_termination/total", "0");
    assert_amount(&report, "/result/difference", "0");
}

#[tokio::test]
async fn test_reason_does_not_change_amounts() {
    let mut results = Vec::new();
    for reason in ["harassment", "wage_delay", "fund_non_payment", "voluntary_exit"] {
        let mut body = reference_request();
        body["reason"] = json!(reason);
        let (status, report) = post_json(create_router_for_test(), "/compare", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["input"]["reason"], reason);
        results.push(report["result"].clone());
    }

    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn test_report_envelope_and_audit_trail() {
    let (_, report) = post_json(create_router_for_test(), "/compare", reference_request()).await;

    assert!(report["calculation_id"].as_str().unwrap().len() == 36);
    assert_eq!(report["engine_version"], env!("CARGO_PKG_VERSION"));

    let steps = report["audit_trace"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 9);
    for (index, step) in steps.iter().enumerate() {
        assert_eq!(step["step_number"], json!(index + 1));
        assert!(!step["legal_ref"].as_str().unwrap().is_empty());
    }
    assert_eq!(steps[0]["rule_id"], "tenure");
    assert_eq!(steps[8]["rule_id"], "scenario_comparison");
}

#[tokio::test]
async fn test_two_reports_share_result_but_not_id() {
    let (_, first) = post_json(create_router_for_test(), "/compare", reference_request()).await;
    let (_, second) = post_json(create_router_for_test(), "/compare", reference_request()).await;

    assert_eq!(first["result"], second["result"]);
    assert_ne!(first["calculation_id"], second["calculation_id"]);
}

// =============================================================================
// SECTION 2: Input Coercion
// =============================================================================

#[tokio::test]
async fn test_brl_formatted_amounts_accepted() {
    let mut body = reference_request();
    body["gross_monthly_salary"] = json!("R$ 3.000,00");
    body["severance_fund_balance"] = json!("15.000,00");

    let (status, report) = post_json(create_router_for_test(), "/compare", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_amount(&report, "/result/difference", "25200");
}

#[tokio::test]
async fn test_numeric_amounts_accepted() {
    let mut body = reference_request();
    body["gross_monthly_salary"] = json!(3000);
    body["severance_fund_balance"] = json!(15000.0);

    let (status, report) = post_json(create_router_for_test(), "/compare", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_amount(&report, "/input/gross_monthly_salary", "3000");
    assert_amount(&report, "/result/indirect_termination/fund_withdrawal", "15000");
}

#[tokio::test]
async fn test_unparseable_amount_coerced_to_zero() {
    let mut body = reference_request();
    body["severance_fund_balance"] = json!("quinze mil");

    let (status, report) = post_json(create_router_for_test(), "/compare", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_amount(&report, "/input/severance_fund_balance", "0");
    assert_amount(&report, "/result/indirect_termination/fund_exit_penalty", "0");
}

#[tokio::test]
async fn test_missing_exit_date_defaults_to_today() {
    let body = json!({
        "gross_monthly_salary": "3000",
        "severance_fund_balance": "0",
        "hire_date": "2000-01-01",
        "reason": "wage_delay"
    });

    let (status, report) = post_json(create_router_for_test(), "/compare", body).await;
    assert_eq!(status, StatusCode::OK);
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    // The request may straddle midnight; accept either side.
    let exit = report["input"]["exit_date"].as_str().unwrap();
    assert!(exit == today || exit < today.as_str());
}

#[tokio::test]
async fn test_reason_label_accepted() {
    let mut body = reference_request();
    body["reason"] = json!("Assédio Moral ou Humilhação");

    let (status, report) = post_json(create_router_for_test(), "/compare", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["input"]["reason"], "harassment");
}

// =============================================================================
// SECTION 3: Document Export
// =============================================================================

#[tokio::test]
async fn test_export_document_returns_attachment() {
    let response = create_router_for_test()
        .oneshot(post_request("/export/document", reference_request().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert_eq!(content_type, "text/plain; charset=utf-8");

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"Memoria_Calculo_Rescisao_"));
    assert!(disposition.ends_with(".txt\""));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();

    assert!(text.contains("MEMÓRIA DE CÁLCULO"));
    assert!(text.contains("Atraso Reiterado de Salário"));
    assert!(text.contains("R$ 7.000,00"));
    assert!(text.contains("R$ 32.200,00"));
    assert!(text.contains("R$ 25.200,00"));
    assert!(text.contains("AVISO LEGAL IMPORTANTE"));
    assert!(text.contains("Página 1 de"));
}

#[tokio::test]
async fn test_export_document_pages_numbered() {
    let response = create_router_for_test()
        .oneshot(post_request("/export/document", reference_request().to_string()))
        .await
        .unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();

    let pages: Vec<&str> = text.split('\u{000C}').collect();
    let total = pages.len();
    for (index, page) in pages.iter().enumerate() {
        assert!(page.contains(&format!("Página {} de {}", index + 1, total)));
    }
}

// =============================================================================
// SECTION 4: Share Link
// =============================================================================

#[tokio::test]
async fn test_share_link() {
    let (status, link) = post_json(create_router_for_test(), "/share", reference_request()).await;
    assert_eq!(status, StatusCode::OK);

    let message = link["message"].as_str().unwrap();
    assert!(message.contains("• Salário: R$ 3.000,00"));
    assert!(message.contains("• FGTS: R$ 15.000,00"));
    assert!(message.contains("Atraso Reiterado de Salário"));
    assert!(message.contains("• Diferença: R$ 25.200,00"));

    let url = link["url"].as_str().unwrap();
    assert!(url.starts_with("https://wa.me/5511999999999?text="));
    assert!(url.ends_with(link["encoded_message"].as_str().unwrap()));
    assert!(!url.contains(' '));
}

#[tokio::test]
async fn test_share_link_uses_in_memory_config() {
    let loaded = ConfigLoader::load("./config/default").expect("Failed to load config");
    let mut export = loaded.export().clone();
    export.share.phone_number = "5521988887777".to_string();
    let config = ComparatorConfig::new(
        loaded.metadata().clone(),
        loaded.config().server().clone(),
        export,
    );
    let router = create_router(AppState::new(ConfigLoader::from_config(config)));

    let (status, link) = post_json(router, "/share", reference_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        link["url"]
            .as_str()
            .unwrap()
            .starts_with("https://wa.me/5521988887777?text=")
    );
}

// =============================================================================
// SECTION 5: Error Cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let response = create_router_for_test()
        .oneshot(post_request("/compare", "{invalid json".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_json_field_returns_validation_error() {
    let body = json!({
        "gross_monthly_salary": "3000",
        "hire_date": "2020-01-01",
        "reason": "wage_delay"
    });

    let (status, error) = post_json(create_router_for_test(), "/compare", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"]
        .as_str()
        .unwrap()
        .contains("severance_fund_balance"));
}

#[tokio::test]
async fn test_blank_hire_date_returns_missing_field() {
    let mut body = reference_request();
    body["hire_date"] = json!("");

    let (status, error) = post_json(create_router_for_test(), "/compare", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MISSING_FIELD");
}

#[tokio::test]
async fn test_invalid_date_returns_400() {
    let mut body = reference_request();
    body["exit_date"] = json!("31/12/2024");

    let (status, error) = post_json(create_router_for_test(), "/compare", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_DATE");
}

#[tokio::test]
async fn test_reversed_dates_return_400() {
    let mut body = reference_request();
    body["exit_date"] = json!("2019-01-01");

    let (status, error) = post_json(create_router_for_test(), "/share", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_negative_salary_returns_400() {
    let mut body = reference_request();
    body["gross_monthly_salary"] = json!("-3000");

    let (status, error) = post_json(create_router_for_test(), "/export/document", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_AMOUNT");
}

#[tokio::test]
async fn test_oversized_salary_returns_400() {
    let mut body = reference_request();
    body["gross_monthly_salary"] = json!("10000000000000000000000000000");

    let (status, error) = post_json(create_router_for_test(), "/compare", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_AMOUNT");
    assert!(error["message"].as_str().unwrap().contains("gross_monthly_salary"));
}

#[tokio::test]
async fn test_ceiling_salary_still_compares() {
    let mut body = reference_request();
    body["gross_monthly_salary"] = json!("1000000000000000");
    body["severance_fund_balance"] = json!("1000000000000000");

    let (status, report) = post_json(create_router_for_test(), "/compare", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_amount(&report, "/result/indirect_termination/fund_withdrawal", "1000000000000000");
}

#[tokio::test]
async fn test_unknown_reason_returns_400() {
    let mut body = reference_request();
    body["reason"] = json!("layoff");

    let (status, error) = post_json(create_router_for_test(), "/compare", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_REASON");
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/compare")
                .body(Body::from(reference_request().to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "MISSING_CONTENT_TYPE");
}
