//! 카드 타입
//!
//! JSON 필드명은 camelCase, 상품 이름은 SCREAMING_SNAKE_CASE입니다.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// 카드 상품
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardProduct {
    Prepaid,
    LimitedUse,
}

impl CardProduct {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardProduct::Prepaid => "PREPAID",
            CardProduct::LimitedUse => "LIMITED_USE",
        }
    }

    /// 대소문자 무시 파싱 (쿼리 파라미터용)
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PREPAID" => Some(CardProduct::Prepaid),
            "LIMITED_USE" => Some(CardProduct::LimitedUse),
            _ => None,
        }
    }

    /// 사람이 읽는 이름 (에러 메시지용)
    pub fn label(&self) -> &'static str {
        match self {
            CardProduct::Prepaid => "Prepaid",
            CardProduct::LimitedUse => "Limited Use",
        }
    }
}

impl std::fmt::Display for CardProduct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Limited Use 카드 제한 조건
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restrictions {
    /// 만료일
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,

    /// 최대 사용 횟수
    #[serde(default)]
    pub max_swipes: Option<u32>,

    /// 건당 한도
    #[serde(default)]
    pub per_transaction_limit: Option<f64>,
}

impl Restrictions {
    pub fn new(expiry_date: NaiveDate, max_swipes: u32, per_transaction_limit: f64) -> Self {
        Self {
            expiry_date: Some(expiry_date),
            max_swipes: Some(max_swipes),
            per_transaction_limit: Some(per_transaction_limit),
        }
    }
}

/// 카드 생성 요청
///
/// 필수 여부는 역직렬화가 아니라 `rules::validate_fields`에서 검사합니다.
/// 누락 필드도 한 번에 모아 메시지로 돌려주기 위함입니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardCreationRequest {
    #[serde(default)]
    pub card_title: Option<String>,

    #[serde(default)]
    pub card_description: Option<String>,

    #[serde(default)]
    pub activation_date: Option<NaiveDate>,

    #[serde(default)]
    pub card_product: Option<CardProduct>,

    #[serde(default)]
    pub load_amount: Option<f64>,

    #[serde(default)]
    pub protection_required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Restrictions>,
}

/// 카드 조회 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    pub card_number: String,
    pub card_title: String,
    pub card_description: String,
    pub activation_date: NaiveDate,
    pub card_product: CardProduct,
    pub load_amount: f64,
    pub protection_required: bool,
    pub restrictions: Option<Restrictions>,
    pub card_creator: String,
    /// `yyyy-MM-ddTHH:mm:ss` (초 미만 없음)
    pub creation_date: NaiveDateTime,
    pub current_load: f64,
    /// Prepaid 카드는 `None`
    pub current_number_of_swipes: Option<u32>,
}
