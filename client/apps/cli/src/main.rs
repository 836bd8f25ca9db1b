//! Lapinta command-line client
//!
//! Uses `anyhow` for top-level failures; library errors stay typed until
//! they reach a command.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth::{AuthConfig, HttpSessionStore, SessionStore};
use marketplace::{HttpResourceGateway, MarketplaceConfig};
use platform::{ApiClient, ClientConfig, Credential, FileKeyValueStore};

mod commands;

#[derive(Parser)]
#[command(name = "lapinta")]
#[command(version)]
#[command(about = "Command-line client for the Lapinta services marketplace")]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,

    /// Talk to a backend on localhost instead of the configured one
    #[arg(long, global = true)]
    dev: bool,
}

/// Everything a command needs, built once per invocation
pub struct App {
    pub session: HttpSessionStore<FileKeyValueStore>,
    pub resources: Arc<HttpResourceGateway>,
    pub marketplace: Arc<MarketplaceConfig>,
}

impl App {
    async fn open(config: ClientConfig) -> anyhow::Result<Self> {
        let storage = FileKeyValueStore::open(&config.storage_path)
            .await
            .with_context(|| format!("opening {}", config.storage_path.display()))?;

        // One credential slot shared by the session and every resource call
        let credential = Credential::new();
        let client = ApiClient::new(config.api_base_url.clone(), credential);

        tracing::debug!(api = %config.api_base_url, "Client configured");

        Ok(Self {
            session: SessionStore::over_http(
                client.clone(),
                storage,
                AuthConfig::from_client_config(&config),
            ),
            resources: Arc::new(HttpResourceGateway::new(client)),
            marketplace: Arc::new(MarketplaceConfig::default()),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lapinta=warn,auth=warn,marketplace=warn,platform=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = if cli.dev {
        ClientConfig::development()
    } else {
        ClientConfig::from_env()
    };

    let app = App::open(config).await?;
    let session = app.session.bootstrap().await;
    tracing::debug!(route = %app.session.route(), signed_in = session.is_authenticated(), "Session ready");

    commands::run(&app, cli.command).await
}
