use anyhow::Context as _;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::CliConfig;

pub fn client() -> Client {
    Client::new()
}

pub fn with_auth(config: &CliConfig, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
    let token = config.get_auth_token()?;
    Ok(req.bearer_auth(token))
}

pub async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> anyhow::Result<T> {
    let resp = send(req).await?;
    let body = resp.json::<T>().await.context("invalid json response")?;
    Ok(body)
}

pub async fn send_text(req: RequestBuilder) -> anyhow::Result<String> {
    let resp = send(req).await?;
    let body = resp.text().await.context("invalid response body")?;
    Ok(body)
}

async fn send(req: RequestBuilder) -> anyhow::Result<Response> {
    let resp = req.send().await.context("request failed")?;
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        return Err(anyhow::anyhow!("request failed ({}): {}", status, error_message(&text)));
    }
    Ok(resp)
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// 서버 에러 본문에서 메시지만 꺼냅니다. 형식이 다르면 본문 그대로.
fn error_message(text: &str) -> String {
    serde_json::from_str::<ErrorResponse>(text)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| text.to_string())
}
