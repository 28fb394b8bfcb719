//! 토큰 명령어
//!
//! 서버와 같은 코덱으로 토큰을 오프라인 계산합니다. 서버 자격 증명과 맞는지 확인할 때 씁니다.

use chrono::{DateTime, Utc};
use cg_core::auth::{codec, Role, TimeBucket};
use serde_json::json;

use crate::commands::OutputFormat;

pub fn derive(
    user_id: &str,
    password: &str,
    role: &str,
    at: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let role = Role::from_str(role).ok_or_else(|| {
        anyhow::anyhow!("unknown role '{}': use prepaid_only or limited_use_only", role)
    })?;
    let at = parse_instant(at)?;
    let bucket = TimeBucket::containing(at);
    let token = codec::encode(user_id, password, role, bucket);

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "token": token,
                "bucketStart": bucket.start().to_rfc3339(),
                "role": role,
            }))?
        ),
        OutputFormat::Text => {
            println!("{}", token);
            println!("bucket: {} ({})", bucket.start().to_rfc3339(), role);
        }
    }
    Ok(())
}

fn parse_instant(at: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    match at {
        None => Ok(Utc::now()),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| anyhow::anyhow!("invalid --at '{}': {}", value, e)),
    }
}
