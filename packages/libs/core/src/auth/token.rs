//! 토큰 발급 및 검증
//!
//! 자격 증명 확인과 코덱을 묶어 시간 기반 토큰을 발급하고, 허용 구간 안에서 역탐색해 검증합니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

use super::bucket::{Clock, SystemClock, TimeBucket};
use super::codec;
use super::credentials::CredentialRegistry;
use super::identity::Identity;

/// `Authorization` 헤더 스킴 접두사
pub const BEARER_PREFIX: &str = "Bearer ";

/// HTTP 헤더에서 Bearer 토큰 추출
///
/// 헤더가 없거나 스킴이 `Bearer `가 아니면 `None`입니다. 접두사 뒤가 비어 있어도
/// 추출은 성공하며, 빈 토큰은 이후 조회 단계에서 거부됩니다.
pub fn bearer_token(auth_header: Option<&str>) -> Option<&str> {
    auth_header?.strip_prefix(BEARER_PREFIX)
}

/// 토큰 서비스
///
/// 레지스트리와 시계만 들고 있으며 상태를 바꾸지 않습니다.
#[derive(Clone)]
pub struct TokenService {
    registry: Arc<CredentialRegistry>,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// 시스템 시계로 생성
    pub fn new(registry: Arc<CredentialRegistry>) -> Self {
        Self::with_clock(registry, Arc::new(SystemClock))
    }

    /// 시계를 지정해 생성
    pub fn with_clock(registry: Arc<CredentialRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    /// 현재 버킷으로 토큰 발급
    pub fn issue(&self, user_id: &str, password: &str) -> Result<String> {
        self.issue_at(user_id, password, self.clock.now())
    }

    /// 주어진 시각의 버킷으로 토큰 발급
    pub fn issue_at(&self, user_id: &str, password: &str, now: DateTime<Utc>) -> Result<String> {
        let role = self
            .registry
            .lookup_role(user_id, password)
            .ok_or(Error::InvalidCredentials)?;

        Ok(codec::encode(user_id, password, role, TimeBucket::containing(now)))
    }

    /// 현재 시각 기준 토큰 검증
    pub fn validate(&self, token: &str) -> Option<Identity> {
        self.validate_at(token, self.clock.now())
    }

    /// 주어진 시각 기준 토큰 검증
    ///
    /// 후보 버킷은 {현재 시, 직전 시} 두 개입니다. 발급 시점이 시 경계 직후였다면 두 시간 가까이,
    /// 경계 직전이었다면 한 시간 남짓 유효합니다. 등록된 자격 증명 수 × 2 번 해시합니다.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Option<Identity> {
        if !codec::is_well_formed(token) {
            return None;
        }

        let current = TimeBucket::containing(now);
        for bucket in [current, current.previous()] {
            for (credential, role) in self.registry.entries() {
                if codec::matches(token, &credential.user_id, &credential.password, role, bucket) {
                    return Some(Identity::new(credential.user_id.clone(), role));
                }
            }
        }

        None
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("credentials", &self.registry.len())
            .finish()
    }
}
