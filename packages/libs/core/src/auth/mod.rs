//! 인증 관련 타입 및 로직
//!
//! # 개요
//!
//! Cardgate는 두 가지 Bearer 토큰을 받습니다:
//!
//! - **정적 토큰**: 운영자가 미리 배포한 장기 토큰 (role별 1개)
//! - **시간 기반 토큰**: 자격 증명과 현재 시(hour)로 결정적으로 파생되는 토큰
//!
//! 서버는 세션을 저장하지 않습니다. 시간 기반 토큰은 검증할 때마다 다시 계산해 비교합니다.
//!
//! # 모듈 구조
//!
//! - `credentials`: 자격 증명 레지스트리
//! - `codec`: 토큰 계산 (SHA-256 + base64url)
//! - `token`: 발급/검증 서비스
//! - `static_tokens`: 정적 토큰 테이블
//! - `gate`: 요청 단위 토큰 해석
//! - `context`: 요청 범위 주체 저장소

mod bucket;
pub mod codec;
pub mod context;
mod credentials;
mod gate;
mod identity;
mod static_tokens;
mod token;

pub use bucket::{Clock, FixedClock, SystemClock, TimeBucket};
pub use credentials::{Credential, CredentialRegistry};
pub use gate::{AuthGate, GateOutcome, LOGIN_PATH};
pub use identity::{Identity, Role};
pub use static_tokens::{StaticTokenTable, STATIC_LIMITED_USER, STATIC_PREPAID_USER};
pub use token::{bearer_token, TokenService, BEARER_PREFIX};
