//! 인증 핸들러
//!
//! 토큰 발급(로그인)과 현재 주체 조회를 제공합니다.

use std::sync::Arc;

use axum::{extract::State, Json};
use cg_core::auth::{context, Role};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::extract::ApiJson;
use crate::state::AppState;

/// 로그인 요청 본문
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// 빈 값 검증
    fn credentials(&self) -> Result<(&str, &str)> {
        let user_id = non_blank(self.user_id.as_deref());
        let password = non_blank(self.password.as_deref());

        match (user_id, password) {
            (Some(user_id), Some(password)) => Ok((user_id, password)),
            _ => {
                let mut errors = Vec::new();
                if user_id.is_none() {
                    errors.push("User ID cannot be empty");
                }
                if password.is_none() {
                    errors.push("Password cannot be empty");
                }
                Err(ApiError::bad_request(format!(
                    "Validation Error: {}",
                    errors.join("; ")
                )))
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// 로그인 응답 본문
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// 현재 주체 응답 본문
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoAmIResponse {
    pub authenticated: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let (user_id, password) = request.credentials()?;

    match state.tokens().issue(user_id, password) {
        Ok(token) => {
            tracing::info!(user_id, "token issued");
            Ok(Json(LoginResponse { token }))
        }
        Err(e) => {
            tracing::warn!(user_id, "login rejected");
            Err(e.into())
        }
    }
}

/// `GET /api/auth/me`
pub async fn whoami() -> Json<WhoAmIResponse> {
    let identity = context::current();

    Json(WhoAmIResponse {
        authenticated: identity.is_some(),
        user_id: identity.as_ref().map(|i| i.user_id.clone()),
        role: identity.map(|i| i.role),
    })
}
