//! API 미들웨어
//!
//! 요청 ID 부여와 인증 게이트를 정의합니다.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use cg_core::auth::context;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

tokio::task_local! {
    static REQUEST_ID: String;
}

/// 현재 요청 ID (에러 본문용)
pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(|id| id.clone()).ok()
}

/// 요청 ID 부여
///
/// 요청마다 UUID v4를 만들어 task-local에 두고 `x-request-id` 응답 헤더로 돌려줍니다.
pub async fn request_id(req: Request, next: Next) -> Response {
    let id = Uuid::new_v4().to_string();
    let mut resp = REQUEST_ID.scope(id.clone(), async move { next.run(req).await }).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        resp.headers_mut().insert("x-request-id", value);
    }
    resp
}

/// 인증 게이트
///
/// 토큰을 주체로 해석한 뒤 하위 핸들러 전체를 주체 컨텍스트 범위 안에서 실행합니다.
/// 핸들러가 에러를 내거나 panic해도 범위를 벗어나면 주체는 사라집니다.
pub async fn auth_gate(State(state): State<Arc<AppState>>, req: Request, next: Next) -> Response {
    // Dev mode: 인증 우회
    if state.config.disable_auth {
        return context::scope(None, next.run(req)).await;
    }

    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let outcome = state.gate.check(req.uri().path(), auth_header);

    match outcome {
        Ok(outcome) => context::scope(outcome.into_identity(), next.run(req)).await,
        Err(e) => {
            tracing::debug!(path = %req.uri().path(), "request rejected by auth gate");
            ApiError::from(e).into_response()
        }
    }
}
