//! cg-core: Cardgate 핵심 라이브러리
//!
//! 이 크레이트는 API 서비스와 CLI가 공유하는 핵심 타입과 로직을 제공합니다.
//!
//! # 모듈 구조
//!
//! - `auth`: 토큰 발급/검증, 정적 토큰, 인증 게이트, 요청 범위 주체
//! - `permissions`: role 기반 카드 상품 접근 판정
//! - `card`: 카드 타입, 생성 규칙, 메모리상 카드 목록
//! - `error`: 공통 에러 타입

pub mod auth;
pub mod card;
pub mod error;
pub mod permissions;

pub use error::{Error, Result};
