//! 인증 명령어

use serde::{Deserialize, Serialize};

use crate::commands::{http, OutputFormat};
use crate::config::CliConfig;

pub async fn login(
    config: &mut CliConfig,
    api_url: &str,
    user_id: &str,
    password: &str,
) -> anyhow::Result<()> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Req<'a> {
        user_id: &'a str,
        password: &'a str,
    }

    #[derive(Deserialize)]
    struct Resp {
        token: String,
    }

    let resp: Resp = http::send_json(
        http::client()
            .post(format!("{}/api/auth/login", api_url))
            .json(&Req { user_id, password }),
    )
    .await?;

    config.auth_token = Some(resp.token);
    config.api_url = Some(api_url.to_string());
    config.save()?;

    println!("Logged in as {}", user_id);
    println!("Token is valid for at least one hour; run 'cg login' again after it expires.");
    Ok(())
}

pub fn logout(config: &mut CliConfig) -> anyhow::Result<()> {
    if config.auth_token.take().is_none() {
        println!("Not logged in");
        return Ok(());
    }
    config.save()?;
    println!("Logged out");
    Ok(())
}

pub async fn whoami(config: &CliConfig, api_url: &str, format: OutputFormat) -> anyhow::Result<()> {
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Me {
        authenticated: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        role: Option<String>,
    }

    let me: Me = http::send_json(http::with_auth(
        config,
        http::client().get(format!("{}/api/auth/me", api_url)),
    )?)
    .await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&me)?),
        OutputFormat::Text => match (me.user_id, me.role) {
            (Some(user_id), Some(role)) => println!("{} ({})", user_id, role),
            _ => println!("Anonymous (authentication disabled on server)"),
        },
    }
    Ok(())
}
