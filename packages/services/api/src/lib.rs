//! Cardgate API 서비스
//!
//! 로그인으로 시간 기반 토큰을 발급하고, `/api` 아래의 모든 요청을 인증 게이트로 보호합니다.
//! 바이너리(`main.rs`)와 통합 테스트가 같은 라우터를 사용합니다.

use std::sync::Arc;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{any, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod state;

pub use config::Config;
pub use state::AppState;

/// 서비스 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 라우터 생성
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Auth
        .route(cg_core::auth::LOGIN_PATH, post(handlers::auth::login))
        .route("/api/auth/me", get(handlers::auth::whoami))
        // Cards
        .route("/api/cards/create", post(handlers::cards::create_card))
        .route("/api/cards", get(handlers::cards::list_cards))
        .route("/api/{*path}", any(handlers::api_not_found))
        // 위 라우트에만 적용. `/api` 밖의 미등록 경로는 게이트 없이 404
        .route_layer(from_fn_with_state(state.clone(), middleware::auth_gate))
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(from_fn(middleware::request_id))
        // State
        .with_state(state)
}
