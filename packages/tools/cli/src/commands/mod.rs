//! CLI 명령어 구현

pub mod auth;
pub mod cards;
pub mod http;
pub mod token;

/// 출력 형식
#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
