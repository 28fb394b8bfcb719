//! API 앱 상태

use std::sync::Arc;

use cg_core::auth::{
    AuthGate, Clock, Credential, CredentialRegistry, Role, StaticTokenTable, SystemClock,
    TokenService,
};

use crate::config::Config;

/// 앱 상태
///
/// 모든 핸들러에서 공유하는 상태입니다. 트래픽을 받기 전에 만들어지고 이후 바뀌지 않으므로 잠금이 없습니다.
#[derive(Debug)]
pub struct AppState {
    /// 설정
    pub config: Config,

    /// 인증 게이트 (정적 토큰 + 시간 기반 토큰)
    pub gate: AuthGate,
}

impl AppState {
    /// 새 상태 생성
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// 시계를 지정해 상태 생성
    pub fn with_clock(config: &Config, clock: Arc<dyn Clock>) -> anyhow::Result<Self> {
        let registry = CredentialRegistry::new([
            (
                Credential::new(&config.prepaid_user_id, &config.prepaid_password),
                Role::PrepaidOnly,
            ),
            (
                Credential::new(&config.limited_user_id, &config.limited_password),
                Role::LimitedUseOnly,
            ),
        ])?;
        let static_tokens = StaticTokenTable::from_role_tokens(
            config.static_prepaid_token.clone(),
            config.static_limited_token.clone(),
        )?;

        tracing::info!(
            credentials = registry.len(),
            static_tokens = static_tokens.len(),
            "auth tables initialized"
        );

        let tokens = TokenService::with_clock(Arc::new(registry), clock);

        Ok(Self {
            config: config.clone(),
            gate: AuthGate::new(static_tokens, tokens),
        })
    }

    /// 토큰 서비스
    pub fn tokens(&self) -> &TokenService {
        self.gate.token_service()
    }
}
