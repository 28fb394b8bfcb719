//! 정적 토큰 테이블
//!
//! 운영자가 발급한 장기 토큰을 고정 주체에 매핑합니다. 시간 기반 탐색보다 먼저 조회됩니다.

use std::collections::HashMap;

use crate::error::{Error, Result};

use super::identity::{Identity, Role};

/// Prepaid 정적 토큰의 사용자 ID
pub const STATIC_PREPAID_USER: &str = "static_prepaid_user";

/// Limited Use 정적 토큰의 사용자 ID
pub const STATIC_LIMITED_USER: &str = "static_limited_user";

/// 정적 토큰 테이블
#[derive(Clone, Default)]
pub struct StaticTokenTable {
    tokens: HashMap<String, Identity>,
}

impl StaticTokenTable {
    /// 임의의 (토큰, 주체) 목록으로 생성
    ///
    /// 빈 토큰이나 중복 토큰은 설정 에러입니다.
    pub fn new(entries: impl IntoIterator<Item = (String, Identity)>) -> Result<Self> {
        let mut tokens = HashMap::new();

        for (token, identity) in entries {
            if token.trim().is_empty() {
                return Err(Error::config(format!(
                    "static token for '{}' must not be empty",
                    identity.user_id
                )));
            }
            if tokens.insert(token, identity.clone()).is_some() {
                return Err(Error::config(format!(
                    "static token for '{}' is already assigned",
                    identity.user_id
                )));
            }
        }

        Ok(Self { tokens })
    }

    /// role별 정적 토큰 두 개로 생성
    pub fn from_role_tokens(prepaid: impl Into<String>, limited: impl Into<String>) -> Result<Self> {
        Self::new([
            (prepaid.into(), Identity::new(STATIC_PREPAID_USER, Role::PrepaidOnly)),
            (limited.into(), Identity::new(STATIC_LIMITED_USER, Role::LimitedUseOnly)),
        ])
    }

    /// 토큰 조회
    pub fn lookup(&self, token: &str) -> Option<Identity> {
        self.tokens.get(token).cloned()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// 토큰 값은 로그에 남기지 않습니다.
impl std::fmt::Debug for StaticTokenTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenTable")
            .field("tokens", &self.tokens.len())
            .finish()
    }
}
