//! 공통 에러 타입
//!
//! Cardgate 전체에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

use crate::auth::Role;
use crate::card::CardProduct;

pub type Result<T> = std::result::Result<T, Error>;

/// 인증 실패 시 클라이언트에 노출되는 유일한 메시지
///
/// 헤더 누락, 잘못된 스킴, 알 수 없는 토큰, 만료된 토큰을 구분하지 않습니다.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: Missing, invalid or expired token.";

/// Cardgate 공통 에러
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Auth Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("Invalid userId or password.")]
    InvalidCredentials,

    #[error("{}", UNAUTHORIZED_MESSAGE)]
    MissingOrMalformedAuthHeader,

    #[error("{}", UNAUTHORIZED_MESSAGE)]
    InvalidOrExpiredToken,

    // ─────────────────────────────────────────────────────────────────────────────
    // Access Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("Forbidden: {} users cannot create {} cards.", role.label(), product.label())]
    ForbiddenCategory { role: Role, product: CardProduct },

    #[error("Not Found: {} users cannot view {} cards.", role.label(), product.label())]
    CategoryNotFound { role: Role, product: CardProduct },

    // ─────────────────────────────────────────────────────────────────────────────
    // Request Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("{message}")]
    Validation { message: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Startup Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// 검증 에러 생성
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// 설정 에러 생성
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// 토큰 인증 실패 여부
    ///
    /// 두 변형은 응답에서 구분되지 않습니다.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Error::MissingOrMalformedAuthHeader | Error::InvalidOrExpiredToken
        )
    }

    /// HTTP 상태 코드로 변환
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Error::Validation { .. } => 400,

            // 401 Unauthorized
            Error::InvalidCredentials
            | Error::MissingOrMalformedAuthHeader
            | Error::InvalidOrExpiredToken => 401,

            // 403 Forbidden
            Error::ForbiddenCategory { .. } => 403,

            // 404 Not Found
            Error::CategoryNotFound { .. } => 404,

            // 500 Internal Server Error
            Error::Config { .. } => 500,
        }
    }

    /// 에러 코드 (클라이언트용)
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidCredentials => "INVALID_CREDENTIALS",
            Error::MissingOrMalformedAuthHeader | Error::InvalidOrExpiredToken => "UNAUTHORIZED",
            Error::ForbiddenCategory { .. } => "FORBIDDEN",
            Error::CategoryNotFound { .. } => "NOT_FOUND",
            Error::Validation { .. } => "VALIDATION_ERROR",
            Error::Config { .. } => "CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_failures_are_indistinguishable() {
        let missing = Error::MissingOrMalformedAuthHeader;
        let expired = Error::InvalidOrExpiredToken;

        assert_eq!(missing.to_string(), expired.to_string());
        assert_eq!(missing.code(), expired.code());
        assert_eq!(missing.status_code(), expired.status_code());
        assert!(missing.is_unauthorized());
        assert!(!Error::InvalidCredentials.is_unauthorized());
    }

    #[test]
    fn test_access_status_codes() {
        let forbidden = Error::ForbiddenCategory {
            role: Role::LimitedUseOnly,
            product: CardProduct::Prepaid,
        };
        let hidden = Error::CategoryNotFound {
            role: Role::LimitedUseOnly,
            product: CardProduct::Prepaid,
        };

        assert_eq!(forbidden.status_code(), 403);
        assert_eq!(hidden.status_code(), 404);
        assert_eq!(
            hidden.to_string(),
            "Not Found: Limited Use users cannot view Prepaid cards."
        );
    }
}
