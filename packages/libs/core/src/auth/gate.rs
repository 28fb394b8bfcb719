//! 인증 게이트
//!
//! 보호된 작업 앞에서 Bearer 토큰을 주체로 해석합니다.
//!
//! # 해석 순서
//! 1. 로그인 경로는 인증 없이 통과
//! 2. `Authorization: Bearer <token>` 헤더 필수
//! 3. 정적 토큰 테이블
//! 4. 시간 기반 토큰 서비스
//!
//! 실패 원인(헤더 누락, 형식 오류, 알 수 없음, 만료)은 외부에 구분되지 않습니다.

use crate::error::{Error, Result};

use super::identity::Identity;
use super::static_tokens::StaticTokenTable;
use super::token::{bearer_token, TokenService};

/// 토큰 발급 경로 (부트스트랩 예외)
pub const LOGIN_PATH: &str = "/api/auth/login";

/// 게이트 판정 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// 인증 없이 통과 (로그인 경로)
    Exempt,

    /// 인증됨
    Authenticated(Identity),
}

impl GateOutcome {
    pub fn into_identity(self) -> Option<Identity> {
        match self {
            GateOutcome::Exempt => None,
            GateOutcome::Authenticated(identity) => Some(identity),
        }
    }
}

/// 인증 게이트
#[derive(Debug, Clone)]
pub struct AuthGate {
    static_tokens: StaticTokenTable,
    tokens: TokenService,
}

impl AuthGate {
    pub fn new(static_tokens: StaticTokenTable, tokens: TokenService) -> Self {
        Self {
            static_tokens,
            tokens,
        }
    }

    pub fn token_service(&self) -> &TokenService {
        &self.tokens
    }

    /// 인증 면제 경로인지
    pub fn is_exempt(path: &str) -> bool {
        path == LOGIN_PATH
    }

    /// 요청 경로와 `Authorization` 헤더로 판정
    pub fn check(&self, path: &str, auth_header: Option<&str>) -> Result<GateOutcome> {
        if Self::is_exempt(path) {
            return Ok(GateOutcome::Exempt);
        }

        self.resolve_header(auth_header).map(GateOutcome::Authenticated)
    }

    /// `Authorization` 헤더 값을 주체로 해석
    pub fn resolve_header(&self, auth_header: Option<&str>) -> Result<Identity> {
        let token = bearer_token(auth_header).ok_or(Error::MissingOrMalformedAuthHeader)?;
        self.resolve_token(token)
    }

    /// 토큰을 주체로 해석
    pub fn resolve_token(&self, token: &str) -> Result<Identity> {
        if let Some(identity) = self.static_tokens.lookup(token) {
            tracing::debug!(user_id = %identity.user_id, "resolved static token");
            return Ok(identity);
        }

        if let Some(identity) = self.tokens.validate(token) {
            tracing::debug!(user_id = %identity.user_id, "resolved time-based token");
            return Ok(identity);
        }

        Err(Error::InvalidOrExpiredToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::bucket::FixedClock;
    use crate::auth::credentials::{Credential, CredentialRegistry};
    use crate::auth::identity::Role;
    use crate::auth::static_tokens::STATIC_LIMITED_USER;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn gate() -> AuthGate {
        let registry = Arc::new(
            CredentialRegistry::new([
                (Credential::new("u1", "p1"), Role::PrepaidOnly),
                (Credential::new("u2", "p2"), Role::LimitedUseOnly),
            ])
            .unwrap(),
        );
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 1, 12, 5, 0).unwrap());
        AuthGate::new(
            StaticTokenTable::from_role_tokens("static-prepaid", "static-limited").unwrap(),
            TokenService::with_clock(registry, Arc::new(clock)),
        )
    }

    #[test]
    fn test_login_path_is_exempt() {
        let outcome = gate().check(LOGIN_PATH, None).unwrap();

        assert_eq!(outcome, GateOutcome::Exempt);
        assert!(outcome.into_identity().is_none());
    }

    #[test]
    fn test_static_token_short_circuits() {
        let identity = gate().resolve_header(Some("Bearer static-limited")).unwrap();

        assert_eq!(identity, Identity::new(STATIC_LIMITED_USER, Role::LimitedUseOnly));
    }

    #[test]
    fn test_time_based_token() {
        let gate = gate();
        let token = gate.token_service().issue("u1", "p1").unwrap();

        let outcome = gate
            .check("/api/cards", Some(&format!("Bearer {token}")))
            .unwrap();

        assert_eq!(
            outcome.into_identity(),
            Some(Identity::new("u1", Role::PrepaidOnly))
        );
    }

    #[test]
    fn test_all_failures_look_alike() {
        let gate = gate();
        let failures = [
            gate.check("/api/cards", None).unwrap_err(),
            gate.check("/api/cards", Some("static-prepaid")).unwrap_err(),
            gate.check("/api/cards", Some("Basic static-prepaid")).unwrap_err(),
            gate.check("/api/cards", Some("Bearer ")).unwrap_err(),
            gate.check("/api/cards", Some("Bearer unknown")).unwrap_err(),
        ];

        for err in &failures {
            assert!(err.is_unauthorized());
            assert_eq!(err.to_string(), failures[0].to_string());
            assert_eq!(err.code(), "UNAUTHORIZED");
        }
    }

    #[test]
    fn test_other_paths_are_not_exempt() {
        assert!(!AuthGate::is_exempt("/api/auth/login/extra"));
        assert!(!AuthGate::is_exempt("/api/auth/me"));
        assert!(gate().check("/api/auth/me", None).is_err());
    }
}
