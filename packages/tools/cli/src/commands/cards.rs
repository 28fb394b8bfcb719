//! 카드 명령어

use std::path::Path;

use anyhow::Context as _;
use cg_core::card::{CardCreationRequest, CardProduct, CardResponse};

use crate::commands::{http, OutputFormat};
use crate::config::CliConfig;

pub async fn list(
    config: &CliConfig,
    api_url: &str,
    product: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let product = CardProduct::from_str(product)
        .ok_or_else(|| anyhow::anyhow!("unknown product '{}': use prepaid or limited_use", product))?;

    let cards: Vec<CardResponse> = http::send_json(http::with_auth(
        config,
        http::client()
            .get(format!("{}/api/cards", api_url))
            .query(&[("cardProduct", product.as_str())]),
    )?)
    .await?;

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("No cards.");
        return Ok(());
    }

    for card in cards {
        println!(
            "- {} {} [{}] load {:.2}/{:.2}",
            card.card_number, card.card_title, card.card_product, card.current_load, card.load_amount
        );
        println!(
            "  active from {} by {} (created {})",
            card.activation_date, card.card_creator, card.creation_date
        );
        if let Some(r) = card.restrictions {
            let expiry = r.expiry_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
            println!(
                "  expires {}, swipes {}/{}, per transaction {:.2}",
                expiry,
                card.current_number_of_swipes.unwrap_or(0),
                r.max_swipes.unwrap_or(0),
                r.per_transaction_limit.unwrap_or(0.0)
            );
        }
    }

    Ok(())
}

pub async fn create(config: &CliConfig, api_url: &str, file: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let request: CardCreationRequest =
        serde_json::from_str(&content).context("card file is not a valid card request")?;

    let message = http::send_text(
        http::with_auth(config, http::client().post(format!("{}/api/cards/create", api_url)))?
            .json(&request),
    )
    .await?;

    println!("{}", message);
    Ok(())
}
