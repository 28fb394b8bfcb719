//! 카드 도메인
//!
//! # 모듈 구조
//!
//! - `model`: 카드 상품, 생성 요청, 응답 타입
//! - `rules`: 생성 요청 필드 검증 및 업무 규칙
//! - `catalog`: 메모리상 카드 목록

mod catalog;
mod model;
mod rules;

pub use catalog::{fabricated_cards, generate_card_number, list_cards};
pub use model::{CardCreationRequest, CardProduct, CardResponse, Restrictions};
pub use rules::{create_card, validate_fields, validate_rules, ValidatedCard, MAX_EXPIRY_DAYS};
