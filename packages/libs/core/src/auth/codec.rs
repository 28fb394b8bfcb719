//! 시간 기반 토큰 코덱
//!
//! (userId, password, role, 시간 버킷)을 고정 길이 불투명 토큰으로 바꾸는 순수 함수입니다.
//! 세션 저장소가 없으므로 같은 입력은 프로세스나 재시작과 무관하게 같은 토큰을 만들어야 합니다.
//!
//! # 형식
//!
//! ```text
//! SHA-256( TAG || len(userId) || userId || len(password) || password
//!              || len(role) || role || year || day_of_year || hour )
//! ```
//!
//! 각 가변 길이 필드 앞에 big-endian `u64` 길이를 붙여 필드 경계가 내용으로 밀리지 않게 합니다.
//! 다이제스트는 패딩 없는 URL-safe base64로 인코딩되어 `Authorization` 헤더에 그대로 들어갑니다.

use base64::{engine::general_purpose, Engine as _};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use super::bucket::TimeBucket;
use super::identity::Role;

/// 도메인 태그 (형식이 바뀌면 버전을 올립니다)
const DOMAIN_TAG: &[u8] = b"cardgate.token.v1";

/// 인코딩된 토큰 길이 (32바이트 다이제스트, 패딩 없는 base64)
pub const TOKEN_LEN: usize = 43;

/// 토큰 계산
pub fn encode(user_id: &str, password: &str, role: Role, bucket: TimeBucket) -> String {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_TAG);
    update_field(&mut hasher, user_id.as_bytes());
    update_field(&mut hasher, password.as_bytes());
    update_field(&mut hasher, role.as_str().as_bytes());
    hasher.update(bucket.year().to_be_bytes());
    hasher.update(bucket.day_of_year().to_be_bytes());
    hasher.update(bucket.hour().to_be_bytes());

    general_purpose::URL_SAFE_NO_PAD.encode(hasher.finalize())
}

/// 후보 튜플에 대한 토큰 일치 여부
///
/// 기대 토큰을 다시 계산해 상수 시간으로 비교합니다.
pub fn matches(token: &str, user_id: &str, password: &str, role: Role, bucket: TimeBucket) -> bool {
    let expected = encode(user_id, password, role, bucket);
    expected.as_bytes().ct_eq(token.as_bytes()).into()
}

/// 형식만 보고 토큰일 수 없는 값을 걸러냄
///
/// 해시 탐색 전에 호출해 명백히 잘못된 입력의 비용을 줄입니다.
pub fn is_well_formed(token: &str) -> bool {
    token.len() == TOKEN_LEN
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn update_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_be_bytes());
    hasher.update(bytes);
}
