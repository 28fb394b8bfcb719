//! 카드 상품 접근 권한
//!
//! # 개요
//!
//! 인증된 주체의 role이 요청한 카드 상품과 맞는지 판정합니다.
//! 맞지 않을 때 읽기는 "없음"(404), 쓰기는 "금지"(403)로 응답해 다른 상품의 존재를 드러내지 않습니다.
//!
//! # 모듈 구조
//!
//! - `evaluator`: 접근 판정

mod evaluator;

pub use evaluator::{authorize, Access};
