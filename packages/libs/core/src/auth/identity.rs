//! 인증 주체 타입
//!
//! 토큰 검증 후 확정된 호출자와 그 role입니다.

use serde::{Deserialize, Serialize};

use crate::card::CardProduct;

/// 호출자 Role
///
/// 어떤 카드 상품을 다룰 수 있는지 결정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Prepaid 카드 전용
    PrepaidOnly,

    /// Limited Use 카드 전용
    LimitedUseOnly,
}

impl Role {
    /// 토큰 파생에 들어가는 고정 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::PrepaidOnly => "PREPAID_ONLY",
            Role::LimitedUseOnly => "LIMITED_USE_ONLY",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "PREPAID_ONLY" => Some(Role::PrepaidOnly),
            "LIMITED_USE_ONLY" => Some(Role::LimitedUseOnly),
            _ => None,
        }
    }

    /// 사람이 읽는 이름 (에러 메시지용)
    pub fn label(&self) -> &'static str {
        match self {
            Role::PrepaidOnly => "Prepaid",
            Role::LimitedUseOnly => "Limited Use",
        }
    }

    /// 이 role이 다룰 수 있는 유일한 카드 상품
    pub fn product(&self) -> CardProduct {
        match self {
            Role::PrepaidOnly => CardProduct::Prepaid,
            Role::LimitedUseOnly => CardProduct::LimitedUse,
        }
    }

    pub fn permits(&self, product: CardProduct) -> bool {
        self.product() == product
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 인증된 주체
///
/// 인증 성공 시에만 만들어지며 저장되지 않습니다. 수명은 요청 하나입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// 사용자 ID
    pub user_id: String,

    /// Role
    pub role: Role,
}

impl Identity {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names() {
        assert_eq!(Role::PrepaidOnly.as_str(), "PREPAID_ONLY");
        assert_eq!(Role::from_str("limited_use_only"), Some(Role::LimitedUseOnly));
        assert_eq!(Role::from_str("admin"), None);
    }

    #[test]
    fn test_role_permits_single_product() {
        assert!(Role::PrepaidOnly.permits(CardProduct::Prepaid));
        assert!(!Role::PrepaidOnly.permits(CardProduct::LimitedUse));
        assert!(Role::LimitedUseOnly.permits(CardProduct::LimitedUse));
        assert!(!Role::LimitedUseOnly.permits(CardProduct::Prepaid));
    }

    #[test]
    fn test_identity_serialization() {
        let identity = Identity::new("u1", Role::PrepaidOnly);
        let json = serde_json::to_value(&identity).unwrap();

        assert_eq!(json["userId"], "u1");
        assert_eq!(json["role"], "PREPAID_ONLY");
    }
}
