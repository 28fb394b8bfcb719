use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::{Json, Router};
use cg_api::{create_router, handlers, AppState, Config};
use cg_core::auth::FixedClock;
use cg_core::error::UNAUTHORIZED_MESSAGE;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

const STATIC_PREPAID: &str = "static-prepaid-token";
const STATIC_LIMITED: &str = "static-limited-token";

fn test_config() -> Config {
    Config {
        port: 0,
        prepaid_user_id: "u1".to_string(),
        prepaid_password: "p1".to_string(),
        limited_user_id: "u2".to_string(),
        limited_password: "p2".to_string(),
        static_prepaid_token: STATIC_PREPAID.to_string(),
        static_limited_token: STATIC_LIMITED.to_string(),
        disable_auth: false,
    }
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 10, 15, 0).unwrap()
}

fn router_at(config: &Config, now: DateTime<Utc>) -> Router {
    let state = AppState::with_clock(config, Arc::new(FixedClock(now))).unwrap();
    create_router(Arc::new(state))
}

fn test_router() -> Router {
    router_at(&test_config(), t0())
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn login(app: &Router, user_id: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/login",
            None,
            &json!({ "userId": user_id, "password": password }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    body_json(response).await["token"].as_str().unwrap().to_string()
}

fn limited_card(today: chrono::NaiveDate) -> Value {
    json!({
        "cardTitle": "Online Card",
        "cardDescription": "Card for online shopping only",
        "activationDate": today + TimeDelta::days(1),
        "cardProduct": "LIMITED_USE",
        "loadAmount": 20.0,
        "protectionRequired": false,
        "restrictions": {
            "expiryDate": today + TimeDelta::days(10),
            "maxSwipes": 5,
            "perTransactionLimit": 10.0
        }
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_router().oneshot(get("/health", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_login_and_whoami() {
    let app = test_router();
    let token = login(&app, "u1", "p1").await;
    assert_eq!(token.len(), 43);

    let response = app
        .clone()
        .oneshot(get("/api/auth/me", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["userId"], "u1");
    assert_eq!(body["role"], "PREPAID_ONLY");
}

#[tokio::test]
async fn test_login_is_deterministic_within_hour() {
    let config = test_config();
    let first = login(&router_at(&config, t0()), "u2", "p2").await;
    let later = login(&router_at(&config, t0() + TimeDelta::minutes(40)), "u2", "p2").await;

    assert_eq!(first, later);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let response = test_router()
        .oneshot(post_json(
            "/api/auth/login",
            None,
            &json!({ "userId": "u1", "password": "wrong" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Invalid userId or password.");
}

#[tokio::test]
async fn test_login_blank_fields() {
    let response = test_router()
        .oneshot(post_json(
            "/api/auth/login",
            None,
            &json!({ "userId": "", "password": "  " }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        "Validation Error: User ID cannot be empty; Password cannot be empty"
    );
}

#[tokio::test]
async fn test_rejections_are_uniform() {
    let app = test_router();
    let requests = vec![
        get("/api/cards?cardProduct=PREPAID", None),
        Request::builder()
            .uri("/api/cards?cardProduct=PREPAID")
            .header(header::AUTHORIZATION, format!("Basic {STATIC_PREPAID}"))
            .body(Body::empty())
            .unwrap(),
        Request::builder()
            .uri("/api/cards?cardProduct=PREPAID")
            .header(header::AUTHORIZATION, "Bearer ")
            .body(Body::empty())
            .unwrap(),
        get("/api/cards?cardProduct=PREPAID", Some("not-a-known-token")),
        get(
            "/api/cards?cardProduct=PREPAID",
            Some("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"),
        ),
    ];

    for request in requests {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
        assert_eq!(body["error"]["message"], UNAUTHORIZED_MESSAGE);
    }
}

#[tokio::test]
async fn test_token_expires_after_two_hours() {
    let config = test_config();
    let token = login(&router_at(&config, t0()), "u1", "p1").await;

    let next_hour = router_at(&config, t0() + TimeDelta::hours(1));
    let response = next_hour
        .oneshot(get("/api/cards?cardProduct=PREPAID", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let two_hours = router_at(&config, t0() + TimeDelta::hours(2));
    let response = two_hours
        .oneshot(get("/api/cards?cardProduct=PREPAID", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_cards_for_own_product() {
    let app = test_router();
    let token = login(&app, "u1", "p1").await;

    let response = app
        .oneshot(get("/api/cards?cardProduct=prepaid", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cards = body_json(response).await;
    let cards = cards.as_array().unwrap();
    assert_eq!(cards.len(), 3);
    assert!(cards.iter().all(|c| c["cardProduct"] == "PREPAID"));
}

#[tokio::test]
async fn test_static_token_cross_product() {
    let app = test_router();

    let response = app
        .clone()
        .oneshot(get("/api/cards?cardProduct=PREPAID", Some(STATIC_LIMITED)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let today = Utc::now().date_naive();
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/cards/create",
            Some(STATIC_LIMITED),
            &json!({
                "cardTitle": "Gift Card",
                "cardDescription": "Prepaid gift card for friends",
                "activationDate": today + TimeDelta::days(1),
                "cardProduct": "PREPAID",
                "loadAmount": 50.0,
                "protectionRequired": true
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        "Forbidden: Limited Use users cannot create Prepaid cards."
    );

    let response = app
        .oneshot(post_json(
            "/api/cards/create",
            Some(STATIC_LIMITED),
            &limited_card(today),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Card Created");
}

#[tokio::test]
async fn test_create_card_validation() {
    let today = Utc::now().date_naive();
    let mut card = limited_card(today);
    card["loadAmount"] = json!(-1.0);

    let response = test_router()
        .oneshot(post_json("/api/cards/create", Some(STATIC_LIMITED), &card))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        "Validation Error: Load amount must be positive"
    );
}

#[tokio::test]
async fn test_invalid_card_product_parameter() {
    let app = test_router();

    for uri in ["/api/cards?cardProduct=GOLD", "/api/cards"] {
        let response = app
            .clone()
            .oneshot(get(uri, Some(STATIC_PREPAID)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(
            body["error"]["message"],
            "Invalid cardProduct parameter. Must be 'PREPAID' or 'LIMITED_USE'."
        );
    }
}

#[tokio::test]
async fn test_unknown_api_path_is_gated() {
    let app = test_router();

    let response = app
        .clone()
        .oneshot(get("/api/unknown", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], UNAUTHORIZED_MESSAGE);

    let response = app
        .oneshot(get("/api/unknown", Some(STATIC_PREPAID)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Not Found: /api/unknown");
}

#[tokio::test]
async fn test_unknown_path_outside_api() {
    let response = test_router().oneshot(get("/nowhere", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_no_identity_after_request() {
    let app = test_router();

    let response = app
        .clone()
        .oneshot(get("/api/auth/me", Some(STATIC_PREPAID)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["userId"], "static_prepaid_user");

    // 핸들러 에러로 끝난 인증 요청
    let response = app
        .oneshot(get("/api/cards?cardProduct=LIMITED_USE", Some(STATIC_PREPAID)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // 같은 스레드에서 주체를 읽는 핸들러를 게이트 없이 실행
    let Json(me) = handlers::auth::whoami().await;
    assert!(!me.authenticated);
    assert!(me.user_id.is_none());

    // 주체 없이 통과시키는 게이트 뒤의 다음 요청
    let mut config = test_config();
    config.disable_auth = true;
    let response = router_at(&config, t0())
        .oneshot(get("/api/auth/me", None))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["authenticated"], false);
    assert!(body.get("userId").is_none());
}

#[tokio::test]
async fn test_create_card_unparsable_body() {
    let app = test_router();
    let today = Utc::now().date_naive();

    let mut unknown_product = limited_card(today);
    unknown_product["cardProduct"] = json!("GOLD");
    let mut bad_date = limited_card(today);
    bad_date["activationDate"] = json!("01/02/2099");

    for body in [unknown_product, bad_date] {
        let response = app
            .clone()
            .oneshot(post_json("/api/cards/create", Some(STATIC_LIMITED), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let request_id = response.headers().get("x-request-id").cloned().unwrap();
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Validation Error: "));
        assert_eq!(body["error"]["requestId"], request_id.to_str().unwrap());
    }

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/cards/create")
                .header(header::AUTHORIZATION, format!("Bearer {STATIC_LIMITED}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"cardTitle": "Trunc"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_login_without_content_type() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .body(Body::from(r#"{"userId":"u1","password":"p1"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Validation Error: "));
}

#[tokio::test]
async fn test_disable_auth() {
    let mut config = test_config();
    config.disable_auth = true;
    let app = router_at(&config, t0());

    let response = app
        .clone()
        .oneshot(get("/api/cards?cardProduct=LIMITED_USE", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 4);

    let response = app.oneshot(get("/api/auth/me", None)).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["authenticated"], false);
}

#[tokio::test]
async fn test_request_id_header() {
    let response = test_router()
        .oneshot(get("/api/auth/me", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let request_id = response
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let body = body_json(response).await;
    assert_eq!(body["error"]["requestId"], request_id);
}
