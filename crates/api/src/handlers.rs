//! Request handlers.

use crate::error::ApiError;
use crate::models::{CalculateRequest, CalculateResponse, ErrorResponse, HealthResponse};
use crate::openapi::openapi_json;
use crate::state::AppState;
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use serde_json::Value;
use sipcalc_domain::SipRequest;
use std::borrow::Cow;
use tracing::{debug, warn};

/// Message returned for every rejected calculation input.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input parameters";

/// Coerces a JSON value to a float.
///
/// Numbers are taken as is (out-of-range literals become infinite), booleans count as `1.0` / `0.0`, and strings are
/// trimmed and parsed, so `"12.5"`, `"1e3"` and `"1_000"` are accepted. `null`,
/// arrays and objects are rejected.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        // Literals beyond f64 range are kept verbatim and parse to +/-inf.
        Value::Number(number) => number
            .as_f64()
            .or_else(|| number.to_string().parse::<f64>().ok()),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::String(text) => strip_digit_separators(text.trim())?.parse::<f64>().ok(),
        _ => None,
    }
}

/// Removes `_` digit separators. Each `_` must sit between two ASCII digits.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let bytes = text.as_bytes();
    let mut digits = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c != '_' {
            digits.push(c);
            continue;
        }
        let between_digits = i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !between_digits {
            return None;
        }
    }

    Some(Cow::Owned(digits))
}

/// Parses a raw request body into a `SipRequest`.
///
/// The body must be a JSON object carrying `monthly_investment`, `annual_rate`
/// and `time_period`. Any failure yields `ApiError::InvalidInput` without saying
/// which field was at fault.
pub fn parse_sip_request(body: &[u8]) -> Result<SipRequest, ApiError> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidInput)?;
    let fields = payload.as_object().ok_or(ApiError::InvalidInput)?;

    let field = |name: &str| {
        fields
            .get(name)
            .and_then(coerce_number)
            .ok_or(ApiError::InvalidInput)
    };

    Ok(SipRequest::new(
        field("monthly_investment")?,
        field("annual_rate")?,
        field("time_period")?,
    ))
}

/// Projects the future value of a SIP.
#[utoipa::path(
    post,
    path = "/calculate",
    tag = "Calculator",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Projection rounded to 2 decimal places", body = CalculateResponse),
        (status = 400, description = "Missing or non-numeric field", body = ErrorResponse)
    )
)]
pub async fn calculate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculateResponse>, ApiError> {
    let request = parse_sip_request(&body).inspect_err(|_| {
        warn!("Rejected calculation request");
    })?;

    let result = state.calculator().compute(&request);
    debug!(
        monthly_investment = request.monthly_investment,
        annual_rate = request.annual_rate,
        time_period = request.time_period,
        future_value = result.future_value,
        "SIP projection computed"
    );

    Ok(Json(CalculateResponse::from(result)))
}

/// Serves the front-end page.
#[utoipa::path(
    get,
    path = "/",
    tag = "Frontend",
    responses(
        (status = 200, description = "Calculator page", body = String, content_type = "text/html"),
        (status = 500, description = "Page could not be read", body = ErrorResponse)
    )
)]
pub async fn serve_frontend(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let path = state.frontend_path();
    let html = tokio::fs::read_to_string(path).await.map_err(|e| {
        warn!(path = %path.display(), error = %e, "Failed to read front end");
        ApiError::FrontendUnavailable(e)
    })?;

    Ok(Html(html))
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Returns the OpenAPI document.
pub async fn openapi_spec() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        openapi_json(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_router;
    use crate::server::ServerConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use serde_json::json;
    use tower::ServiceExt;

    fn test_app() -> axum::Router {
        let config = ServerConfig::default().with_frontend_path(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../frontend.html"
        ));
        create_router(AppState::new(config))
    }

    async fn post_calculate(body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/calculate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn invalid() -> Value {
        json!({ "error": "Invalid input parameters" })
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(10)), Some(10.0));
        assert_eq!(coerce_number(&json!(2.5)), Some(2.5));
        assert_eq!(coerce_number(&json!(-3)), Some(-3.0));
        assert_eq!(coerce_number(&json!("1000")), Some(1000.0));
        assert_eq!(coerce_number(&json!(" 12.5 ")), Some(12.5));
        assert_eq!(coerce_number(&json!("1e3")), Some(1000.0));
        assert_eq!(coerce_number(&json!("abc")), None);
        assert_eq!(coerce_number(&json!("")), None);
        assert_eq!(coerce_number(&json!("1_000")), Some(1000.0));
        assert_eq!(coerce_number(&json!("1_000.000_5")), Some(1000.0005));
        assert_eq!(coerce_number(&json!("_1000")), None);
        assert_eq!(coerce_number(&json!("1000_")), None);
        assert_eq!(coerce_number(&json!("1__000")), None);
        assert_eq!(coerce_number(&json!("1_.5")), None);
        assert_eq!(coerce_number(&json!(null)), None);
        assert_eq!(coerce_number(&json!(true)), Some(1.0));
        assert_eq!(coerce_number(&json!(false)), Some(0.0));
        assert_eq!(coerce_number(&json!([1])), None);
        assert_eq!(coerce_number(&json!({ "v": 1 })), None);
    }

    #[test]
    fn test_parse_sip_request() {
        let request = parse_sip_request(
            br#"{"monthly_investment": "500", "annual_rate": 0, "time_period": 2}"#,
        )
        .unwrap();
        assert_eq!(request, SipRequest::new(500.0, 0.0, 2.0));
    }

    #[test]
    fn test_parse_sip_request_accepts_booleans() {
        let request = parse_sip_request(
            br#"{"monthly_investment": 1000, "annual_rate": true, "time_period": 1}"#,
        )
        .unwrap();
        assert_eq!(request, SipRequest::new(1000.0, 1.0, 1.0));
    }

    #[test]
    fn test_parse_sip_request_out_of_range_number_is_infinite() {
        let request = parse_sip_request(
            br#"{"monthly_investment": 1e400, "annual_rate": 10, "time_period": 5}"#,
        )
        .unwrap();
        assert_eq!(request.monthly_investment, f64::INFINITY);
        assert_eq!(request.annual_rate, 10.0);
    }

    #[test]
    fn test_parse_sip_request_ignores_extra_fields() {
        let request = parse_sip_request(
            br#"{"monthly_investment": 1, "annual_rate": 2, "time_period": 3, "currency": "INR"}"#,
        )
        .unwrap();
        assert_eq!(request, SipRequest::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_parse_sip_request_rejects_non_objects() {
        let bodies: [&[u8]; 6] = [b"", b"not json", b"[1, 2, 3]", b"\"text\"", b"42", b"null"];
        for body in bodies {
            assert!(matches!(
                parse_sip_request(body),
                Err(ApiError::InvalidInput)
            ));
        }
    }

    #[tokio::test]
    async fn test_calculate_twelve_percent() {
        let (status, json) = post_calculate(
            r#"{"monthly_investment": 1000, "annual_rate": 12, "time_period": 1}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["future_value"], 12809.33);
        assert_eq!(json["invested_amount"], 12000.0);
        assert_eq!(json["estimated_gain"], 809.33);
    }

    #[tokio::test]
    async fn test_calculate_zero_rate() {
        let (status, json) = post_calculate(
            r#"{"monthly_investment": 500, "annual_rate": 0, "time_period": 2}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["future_value"], 12000.0);
        assert_eq!(json["invested_amount"], 12000.0);
        assert_eq!(json["estimated_gain"], 0.0);
    }

    #[tokio::test]
    async fn test_calculate_accepts_numeric_strings() {
        let (status, json) = post_calculate(
            r#"{"monthly_investment": "1000", "annual_rate": "12", "time_period": "1"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["future_value"], 12809.33);
    }

    #[tokio::test]
    async fn test_calculate_accepts_booleans_as_numbers() {
        let (status, json) = post_calculate(
            r#"{"monthly_investment": 1000, "annual_rate": true, "time_period": 1}"#,
        )
        .await;

        let expected = sipcalc_domain::calculate_sip(1000.0, 1.0, 1.0).rounded();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["future_value"], expected.future_value);
        assert_eq!(json["invested_amount"], 12000.0);

        let (status, json) = post_calculate(
            r#"{"monthly_investment": 1000, "annual_rate": 12, "time_period": false}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["future_value"], 0.0);
    }

    #[tokio::test]
    async fn test_calculate_accepts_digit_separators() {
        let (status, json) = post_calculate(
            r#"{"monthly_investment": "1_000", "annual_rate": 12, "time_period": 1}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["future_value"], 12809.33);
    }

    #[tokio::test]
    async fn test_calculate_out_of_range_literal_overflows() {
        let (status, json) = post_calculate(
            r#"{"monthly_investment": 1e400, "annual_rate": 10, "time_period": 5}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["future_value"].is_null());
        assert!(json["invested_amount"].is_null());
    }

    #[tokio::test]
    async fn test_calculate_rejects_non_numeric_string() {
        let (status, json) = post_calculate(
            r#"{"monthly_investment": "abc", "annual_rate": 10, "time_period": 5}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, invalid());
    }

    #[tokio::test]
    async fn test_calculate_rejects_missing_fields() {
        let bodies = [
            r#"{"annual_rate": 10, "time_period": 5}"#,
            r#"{"monthly_investment": 100, "time_period": 5}"#,
            r#"{"monthly_investment": 100, "annual_rate": 10}"#,
            r#"{}"#,
        ];
        for body in bodies {
            let (status, json) = post_calculate(body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(json, invalid());
        }
    }

    #[tokio::test]
    async fn test_calculate_rejects_wrong_types() {
        let bodies = [
            r#"{"monthly_investment": null, "annual_rate": 10, "time_period": 5}"#,
            r#"{"monthly_investment": 100, "annual_rate": {"v": 10}, "time_period": 5}"#,
            r#"{"monthly_investment": 100, "annual_rate": 10, "time_period": [5]}"#,
            r#"[100, 10, 5]"#,
            r#"garbage"#,
            "",
        ];
        for body in bodies {
            let (status, json) = post_calculate(body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(json, invalid());
        }
    }

    #[tokio::test]
    async fn test_calculate_ignores_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/calculate")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(
                r#"{"monthly_investment": 500, "annual_rate": 0, "time_period": 2}"#,
            ))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_calculate_allows_any_origin() {
        let request = Request::builder()
            .method("POST")
            .uri("/calculate")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::from(
                r#"{"monthly_investment": 1, "annual_rate": 1, "time_period": 1}"#,
            ))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_serve_frontend() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("/calculate"));
    }

    #[tokio::test]
    async fn test_serve_frontend_missing_file() {
        let config = ServerConfig::default().with_frontend_path("/nonexistent/frontend.html");
        let app = create_router(AppState::new(config));
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Front end unavailable");
    }

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_openapi_route() {
        let request = Request::builder()
            .uri("/api-docs/openapi.json")
            .body(Body::empty())
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert!(json["paths"]["/calculate"].is_object());
    }
}
