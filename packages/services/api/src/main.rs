//! Cardgate API 서버

use std::net::SocketAddr;
use std::sync::Arc;

use cg_api::{create_router, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 환경변수 로드
    dotenvy::dotenv().ok();

    // 로깅 초기화
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "cg_api=debug,cg_core=debug,tower_http=debug".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 설정 로드
    let config = Config::from_env()?;
    tracing::info!("Starting Cardgate API with config: {:?}", config);
    if config.disable_auth {
        tracing::warn!("CG_DISABLE_AUTH is set: requests are served without authentication");
    }

    // 앱 상태 초기화
    let state = Arc::new(AppState::new(&config)?);

    let app = create_router(state);

    // 서버 시작
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Cardgate API listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
