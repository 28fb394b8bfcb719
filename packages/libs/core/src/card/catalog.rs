//! 카드 목록
//!
//! 저장소가 없으므로 요청마다 고정 카드 목록을 새로 만들어 상품별로 걸러 돌려줍니다.
//! 카드 번호는 매번 새로 생성됩니다.

use chrono::{NaiveDate, NaiveDateTime, SubsecRound, TimeDelta};
use uuid::Uuid;

use crate::auth::Identity;
use crate::error::Result;
use crate::permissions::{authorize, Access};

use super::model::{CardProduct, CardResponse, Restrictions};

/// 상품별 카드 조회
///
/// 권한 판정을 먼저 하므로 다른 상품 조회는 목록 생성 없이 404로 끝납니다.
pub fn list_cards(
    identity: Option<&Identity>,
    product: CardProduct,
    now: NaiveDateTime,
) -> Result<Vec<CardResponse>> {
    authorize(identity, product, Access::Read)?;

    Ok(fabricated_cards(now)
        .into_iter()
        .filter(|card| card.card_product == product)
        .collect())
}

/// 전체 카드 목록
///
/// 앞의 다섯 장은 과거 날짜로 고정, 뒤의 두 장은 `now` 기준 상대 날짜입니다.
pub fn fabricated_cards(now: NaiveDateTime) -> Vec<CardResponse> {
    let now = now.trunc_subsecs(0);
    let today = now.date();

    vec![
        card(
            "Travel Buddy Card",
            "A versatile card for all your travel needs.",
            ymd(2024, 1, 15),
            CardProduct::Prepaid,
            100.00,
            true,
            None,
            "Alice Smith",
            at(ymd(2023, 12, 10), 10, 0),
            85.50,
            None,
        ),
        card(
            "Online Shopping Card",
            "Secure card for online purchases with spending limits.",
            ymd(2024, 3, 1),
            CardProduct::LimitedUse,
            50.00,
            false,
            Some(Restrictions::new(ymd(2025, 3, 1), 10, 20.00)),
            "Bob Johnson",
            at(ymd(2024, 2, 20), 14, 30),
            30.00,
            Some(3),
        ),
        card(
            "Gaming Pass",
            "Limited use card for in-game purchases.",
            ymd(2024, 5, 10),
            CardProduct::LimitedUse,
            25.00,
            true,
            Some(Restrictions::new(ymd(2024, 12, 31), 5, 10.00)),
            "Charlie Brown",
            at(ymd(2024, 5, 5), 9, 0),
            25.00,
            Some(0),
        ),
        card(
            "Daily Commute Card",
            "Prepaid card for public transport.",
            ymd(2023, 10, 1),
            CardProduct::Prepaid,
            50.00,
            true,
            None,
            "Diana Prince",
            at(ymd(2023, 9, 25), 11, 45),
            10.00,
            None,
        ),
        card(
            "Project Expense Card",
            "Temporary card for project-related expenses.",
            ymd(2024, 6, 1),
            CardProduct::LimitedUse,
            500.00,
            true,
            Some(Restrictions::new(ymd(2024, 8, 31), 20, 100.00)),
            "Eve Adams",
            at(ymd(2024, 5, 28), 16, 0),
            450.00,
            Some(5),
        ),
        card(
            "Gift Voucher Card",
            "A simple prepaid gift card.",
            today + TimeDelta::days(5),
            CardProduct::Prepaid,
            20.00,
            true,
            None,
            "Frank Green",
            now - TimeDelta::days(2),
            20.00,
            None,
        ),
        card(
            "Subscription Card",
            "Limited use card for monthly subscriptions.",
            today + TimeDelta::days(10),
            CardProduct::LimitedUse,
            30.00,
            false,
            Some(Restrictions::new(today + TimeDelta::days(20), 1, 30.00)),
            "Grace Hopper",
            now - TimeDelta::days(1),
            30.00,
            Some(0),
        ),
    ]
}

/// 16자리 카드 번호 (4자리씩 공백 구분)
pub fn generate_card_number() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex.as_bytes()[..16]
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[allow(clippy::too_many_arguments)]
fn card(
    title: &str,
    description: &str,
    activation_date: NaiveDate,
    product: CardProduct,
    load_amount: f64,
    protection_required: bool,
    restrictions: Option<Restrictions>,
    creator: &str,
    creation_date: NaiveDateTime,
    current_load: f64,
    current_number_of_swipes: Option<u32>,
) -> CardResponse {
    CardResponse {
        card_number: generate_card_number(),
        card_title: title.to_string(),
        card_description: description.to_string(),
        activation_date,
        card_product: product,
        load_amount,
        protection_required,
        restrictions,
        card_creator: creator.to_string(),
        creation_date,
        current_load,
        current_number_of_swipes,
    }
}

// 고정 데이터 전용 (유효한 날짜만 사용)
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap_or_default()
}
