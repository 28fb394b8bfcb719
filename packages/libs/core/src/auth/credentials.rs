//! 자격 증명 레지스트리
//!
//! 시작 시 설정에서 한 번 만들어지고 이후 읽기 전용인 (userId, password) → Role 매핑입니다.

use crate::error::{Error, Result};

use super::identity::Role;

/// 등록된 자격 증명 한 건
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub user_id: String,
    pub password: String,
}

impl Credential {
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
        }
    }
}

// 비밀번호는 로그에 남기지 않습니다.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("user_id", &self.user_id)
            .field("password", &"***")
            .finish()
    }
}

/// 자격 증명 레지스트리
///
/// 변경 API가 없으므로 `Arc`로 공유해 동시에 읽어도 안전합니다.
#[derive(Debug, Clone)]
pub struct CredentialRegistry {
    entries: Vec<(Credential, Role)>,
}

impl CredentialRegistry {
    /// 레지스트리 생성
    ///
    /// 빈 userId와 중복된 (userId, password) 쌍은 설정 에러입니다.
    pub fn new(entries: impl IntoIterator<Item = (Credential, Role)>) -> Result<Self> {
        let mut registry = Self {
            entries: Vec::new(),
        };

        for (credential, role) in entries {
            if credential.user_id.trim().is_empty() {
                return Err(Error::config("credential userId must not be empty"));
            }
            if registry.lookup_role(&credential.user_id, &credential.password).is_some() {
                return Err(Error::config(format!(
                    "duplicate credential for user '{}'",
                    credential.user_id
                )));
            }
            registry.entries.push((credential, role));
        }

        Ok(registry)
    }

    /// Role 조회
    ///
    /// 알 수 없는 사용자와 틀린 비밀번호를 구분하지 않습니다.
    pub fn lookup_role(&self, user_id: &str, password: &str) -> Option<Role> {
        self.entries
            .iter()
            .find(|(c, _)| c.user_id == user_id && c.password == password)
            .map(|(_, role)| *role)
    }

    /// 등록된 (자격 증명, role) 목록
    pub fn entries(&self) -> impl Iterator<Item = (&Credential, Role)> {
        self.entries.iter().map(|(c, role)| (c, *role))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
