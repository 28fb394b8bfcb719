//! Cardgate CLI (`cg`)
//!
//! API 서비스에 로그인해 토큰을 저장하고, 카드를 조회/생성합니다.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;

use commands::OutputFormat;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "cg")]
#[command(author, version, about = "Cardgate CLI - card API client", long_about = None)]
struct Cli {
    /// API URL (overrides CG_API_URL and saved config)
    #[arg(long, global = true)]
    api: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    // ─────────────────────────────────────────────────────────────────────────
    // Auth
    // ─────────────────────────────────────────────────────────────────────────
    /// Login and store the issued token
    Login {
        #[arg(long)]
        user_id: String,
        #[arg(long, env = "CG_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Drop the stored token
    Logout,

    /// Show current identity
    Whoami,

    // ─────────────────────────────────────────────────────────────────────────
    // Cards
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage cards
    Cards {
        #[command(subcommand)]
        action: CardsAction,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Token
    // ─────────────────────────────────────────────────────────────────────────
    /// Offline token tools
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand)]
enum CardsAction {
    /// List cards of a product (prepaid | limited_use)
    List {
        #[arg(long)]
        product: String,
    },
    /// Create a card from a JSON request file
    Create {
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Derive the time-based token for a credential
    Derive {
        #[arg(long)]
        user_id: String,
        #[arg(long, env = "CG_PASSWORD", hide_env_values = true)]
        password: String,
        /// prepaid_only | limited_use_only
        #[arg(long)]
        role: String,
        /// RFC3339 instant (default: now)
        #[arg(long)]
        at: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 설정 로드
    let mut config = CliConfig::load()?;
    let api_url = config.api_url(cli.api.as_deref());

    // 명령 실행
    match cli.command {
        Commands::Login { user_id, password } => {
            commands::auth::login(&mut config, &api_url, &user_id, &password).await
        }
        Commands::Logout => commands::auth::logout(&mut config),
        Commands::Whoami => commands::auth::whoami(&config, &api_url, cli.format).await,

        Commands::Cards { action } => match action {
            CardsAction::List { product } => {
                commands::cards::list(&config, &api_url, &product, cli.format).await
            }
            CardsAction::Create { file } => commands::cards::create(&config, &api_url, &file).await,
        },

        Commands::Token { action } => match action {
            TokenAction::Derive { user_id, password, role, at } => {
                commands::token::derive(&user_id, &password, &role, at.as_deref(), cli.format)
            }
        },
    }
}
