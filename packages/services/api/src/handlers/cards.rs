//! 카드 핸들러

use axum::{extract::Query, Json};
use cg_core::auth::context;
use cg_core::card::{self, CardCreationRequest, CardProduct, CardResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::extract::ApiJson;

const INVALID_PRODUCT: &str = "Invalid cardProduct parameter. Must be 'PREPAID' or 'LIMITED_USE'.";

/// 카드 목록 쿼리
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCardsQuery {
    #[serde(default)]
    pub card_product: Option<String>,
}

/// `POST /api/cards/create`
pub async fn create_card(ApiJson(request): ApiJson<CardCreationRequest>) -> Result<&'static str> {
    let identity = context::current();
    let message = card::create_card(&request, identity.as_ref(), Utc::now().date_naive())?;

    tracing::info!(
        user_id = identity.as_ref().map(|i| i.user_id.as_str()),
        product = ?request.card_product,
        "card creation accepted"
    );
    Ok(message)
}

/// `GET /api/cards?cardProduct=...`
pub async fn list_cards(Query(query): Query<ListCardsQuery>) -> Result<Json<Vec<CardResponse>>> {
    let product = query
        .card_product
        .as_deref()
        .and_then(CardProduct::from_str)
        .ok_or_else(|| ApiError::bad_request(INVALID_PRODUCT))?;

    let identity = context::current();
    let cards = card::list_cards(identity.as_ref(), product, Utc::now().naive_utc())?;

    Ok(Json(cards))
}
