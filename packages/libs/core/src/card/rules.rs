//! 카드 생성 규칙
//!
//! 필드 검증 → 업무 규칙 → 권한 판정 순서로 평가합니다.

use chrono::{NaiveDate, TimeDelta};

use crate::auth::Identity;
use crate::error::{Error, Result};
use crate::permissions::{authorize, Access};

use super::model::{CardCreationRequest, CardProduct, Restrictions};

/// Limited Use 카드 만료일 상한 (오늘로부터 일 수)
pub const MAX_EXPIRY_DAYS: i64 = 32;

const TITLE_LEN: (usize, usize) = (3, 100);
const DESCRIPTION_LEN: (usize, usize) = (10, 500);

/// 필수 필드가 모두 채워진 요청
#[derive(Debug, Clone)]
pub struct ValidatedCard<'a> {
    pub product: CardProduct,
    pub activation_date: NaiveDate,
    pub load_amount: f64,
    pub protection_required: bool,
    pub restrictions: Option<&'a Restrictions>,
}

/// 카드 생성 처리
///
/// 모든 검사를 통과하면 확인 메시지를 돌려줍니다. 카드는 저장되지 않습니다.
pub fn create_card(
    request: &CardCreationRequest,
    identity: Option<&Identity>,
    today: NaiveDate,
) -> Result<&'static str> {
    let card = validate_fields(request)?;
    validate_rules(&card, today)?;
    authorize(identity, card.product, Access::Write)?;

    Ok("Card Created")
}

/// 필드 단위 검증
///
/// 실패한 항목을 모두 모아 `Validation Error: a; b` 형태 메시지 하나로 돌려줍니다.
pub fn validate_fields(request: &CardCreationRequest) -> Result<ValidatedCard<'_>> {
    let mut errors: Vec<&'static str> = Vec::new();

    check_text(
        &mut errors,
        request.card_title.as_deref(),
        TITLE_LEN,
        "Card title cannot be empty",
        "Card title must be between 3 and 100 characters",
    );
    check_text(
        &mut errors,
        request.card_description.as_deref(),
        DESCRIPTION_LEN,
        "Card description cannot be empty",
        "Card description must be between 10 and 500 characters",
    );

    if request.activation_date.is_none() {
        errors.push("Activation date cannot be null");
    }
    if request.card_product.is_none() {
        errors.push("Card product type cannot be null");
    }
    match request.load_amount {
        None => errors.push("Load amount cannot be null"),
        Some(amount) if amount <= 0.0 => errors.push("Load amount must be positive"),
        Some(_) => {}
    }
    if request.protection_required.is_none() {
        errors.push("Protection required cannot be null");
    }

    match (
        request.card_product,
        request.activation_date,
        request.load_amount,
        request.protection_required,
    ) {
        (Some(product), Some(activation_date), Some(load_amount), Some(protection_required))
            if errors.is_empty() =>
        {
            Ok(ValidatedCard {
                product,
                activation_date,
                load_amount,
                protection_required,
                restrictions: request.restrictions.as_ref(),
            })
        }
        _ => Err(Error::validation(format!(
            "Validation Error: {}",
            errors.join("; ")
        ))),
    }
}

/// 업무 규칙 검증
///
/// 첫 번째로 위반한 규칙의 메시지를 돌려줍니다.
pub fn validate_rules(card: &ValidatedCard<'_>, today: NaiveDate) -> Result<()> {
    let prepaid = card.product == CardProduct::Prepaid;
    let limited = card.product == CardProduct::LimitedUse;

    if prepaid && !card.protection_required {
        return Err(Error::validation(
            "For Prepaid cards, 'protectionRequired' must be true.",
        ));
    }
    if limited && card.restrictions.is_none() {
        return Err(Error::validation(
            "For Limited Use cards, 'restrictions' object must be provided.",
        ));
    }
    if prepaid && card.restrictions.is_some() {
        return Err(Error::validation("Prepaid cards cannot have 'restrictions'."));
    }
    if card.activation_date < today {
        return Err(Error::validation("Activation date must be in the future."));
    }

    if limited {
        if let Some(expiry) = card.restrictions.and_then(|r| r.expiry_date) {
            if expiry < today {
                return Err(Error::validation(
                    "For Limited Use cards, 'expiryDate' must be in the future.",
                ));
            }
            if expiry > today + TimeDelta::days(MAX_EXPIRY_DAYS) {
                return Err(Error::validation(
                    "For Limited Use cards, 'expiryDate' must be at maximum 32 days from today.",
                ));
            }
        }
    }

    if prepaid && card.load_amount % 5.0 != 0.0 {
        return Err(Error::validation(
            "For Prepaid cards, 'loadAmount' must be a multiple of 5.",
        ));
    }

    Ok(())
}

fn check_text(
    errors: &mut Vec<&'static str>,
    value: Option<&str>,
    (min, max): (usize, usize),
    empty_message: &'static str,
    length_message: &'static str,
) {
    let Some(value) = value else {
        errors.push(empty_message);
        return;
    };

    if value.trim().is_empty() {
        errors.push(empty_message);
    }
    let len = value.chars().count();
    if len < min || len > max {
        errors.push(length_message);
    }
}
