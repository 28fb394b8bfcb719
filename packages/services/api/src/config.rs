//! API 서비스 설정

use std::env;

use anyhow::Context as _;

/// API 서비스 설정
///
/// 시작 시 한 번 읽고 다시 읽지 않습니다.
#[derive(Clone)]
pub struct Config {
    /// 서버 포트
    pub port: u16,

    /// PREPAID_ONLY 자격 증명
    pub prepaid_user_id: String,
    pub prepaid_password: String,

    /// LIMITED_USE_ONLY 자격 증명
    pub limited_user_id: String,
    pub limited_password: String,

    /// role별 정적 토큰
    pub static_prepaid_token: String,
    pub static_limited_token: String,

    /// Auth 비활성화 (개발용)
    pub disable_auth: bool,
}

impl Config {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env::var("CG_API_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("CG_API_PORT must be a port number")?,

            prepaid_user_id: required("CG_PREPAID_USER_ID")?,
            prepaid_password: required("CG_PREPAID_PASSWORD")?,
            limited_user_id: required("CG_LIMITED_USER_ID")?,
            limited_password: required("CG_LIMITED_PASSWORD")?,

            static_prepaid_token: required("CG_STATIC_PREPAID_TOKEN")?,
            static_limited_token: required("CG_STATIC_LIMITED_TOKEN")?,

            disable_auth: env::var("CG_DISABLE_AUTH")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
        })
    }
}

fn required(name: &str) -> anyhow::Result<String> {
    env::var(name).with_context(|| format!("{name} is not set"))
}

// 비밀번호와 토큰은 로그에 남기지 않습니다.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("prepaid_user_id", &self.prepaid_user_id)
            .field("limited_user_id", &self.limited_user_id)
            .field("disable_auth", &self.disable_auth)
            .finish_non_exhaustive()
    }
}
