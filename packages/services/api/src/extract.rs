//! 요청 추출기

use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON 요청 본문
///
/// 본문 파싱 실패(깨진 JSON, 알 수 없는 enum 값, 잘못된 날짜, Content-Type 누락)도
/// 에러 본문 형식을 지키는 400으로 돌려줍니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(status = %rejection.status(), "request body rejected");
        ApiError::bad_request(format!("Validation Error: {}", rejection.body_text()))
    }
}
