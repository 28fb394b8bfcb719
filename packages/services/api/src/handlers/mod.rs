//! HTTP 핸들러

use axum::http::Uri;

use crate::error::ApiError;

pub mod auth;
pub mod cards;
pub mod health;

/// `/api` 아래 등록되지 않은 경로
///
/// 게이트 뒤에 있으므로 토큰 없는 요청은 여기까지 오지 않고 401을 받습니다.
pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        path: uri.path().to_string(),
    }
}
