//! CLI 설정
//!
//! `~/.cardgate/config.json`에 토큰과 API URL을 저장합니다.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// API URL을 어디에서도 찾지 못했을 때의 기본값
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// CLI 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// 저장된 인증 토큰
    pub auth_token: Option<String>,

    /// 기본 API URL
    pub api_url: Option<String>,
}

impl CliConfig {
    /// 설정 파일 경로
    fn config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(home.join(".cardgate").join("config.json"))
    }

    /// 설정 로드
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: CliConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 설정 저장
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// API URL 결정 (옵션 > `CG_API_URL` > 저장값 > 기본값)
    pub fn api_url(&self, flag: Option<&str>) -> String {
        resolve_api_url(flag, std::env::var("CG_API_URL").ok(), self.api_url.as_deref())
    }

    /// 인증 토큰 결정 (`CG_AUTH_TOKEN` > 저장값)
    pub fn get_auth_token(&self) -> anyhow::Result<String> {
        std::env::var("CG_AUTH_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| self.auth_token.clone())
            .ok_or_else(|| anyhow::anyhow!("Not logged in. Use 'cg login' first."))
    }
}

fn resolve_api_url(flag: Option<&str>, env: Option<String>, stored: Option<&str>) -> String {
    let url = flag
        .map(str::to_string)
        .or(env.filter(|u| !u.is_empty()))
        .or_else(|| stored.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_precedence() {
        let env = || Some("http://env:1".to_string());

        assert_eq!(
            resolve_api_url(Some("http://flag:1/"), env(), Some("http://stored:1")),
            "http://flag:1"
        );
        assert_eq!(resolve_api_url(None, env(), Some("http://stored:1")), "http://env:1");
        assert_eq!(resolve_api_url(None, None, Some("http://stored:1")), "http://stored:1");
        assert_eq!(resolve_api_url(None, Some(String::new()), None), DEFAULT_API_URL);
    }

    #[test]
    fn test_config_json_shape() {
        let config = CliConfig {
            auth_token: Some("abc".to_string()),
            api_url: None,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["auth_token"], "abc");

        let parsed: CliConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.auth_token.is_none());
    }
}
