//! Alice Player - character detail page binary.
//!
//! `alice-player <page-path>` loads one page and writes it to stdout.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alice_player::application::api::Api;
use alice_player::application::services::CharacterDetailService;
use alice_player::infrastructure::{load_dotenv, HttpApiAdapter, OutputFormat, PlayerConfig};
use alice_player::{presentation, routes};

const USAGE: &str = "usage: alice-player <page-path>   (e.g. /character/12)";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    load_dotenv(&cwd);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alice_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(page_path) = std::env::args().nth(1) else {
        eprintln!("{}", USAGE);
        return Ok(ExitCode::from(2));
    };

    let config = PlayerConfig::from_env().context("invalid configuration")?;
    tracing::info!(api = %config.api_base_url, "Starting Alice Player");

    // HTTP
    let raw_api = Arc::new(
        HttpApiAdapter::new(&config.api_base_url).context("failed to build HTTP client")?,
    );
    let api = Api::new(raw_api);
    let service = CharacterDetailService::new(api, config.portraits.clone());

    match routes::load_character_page(&service, &page_path).await {
        Ok(view) => {
            match config.output {
                OutputFormat::Html => print!("{}", presentation::render_character_page(&view)),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&view).context("failed to serialize view")?
                ),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::info!(kind = e.kind(), "Character page ended with status: {}", e);
            match config.output {
                OutputFormat::Html => print!("{}", presentation::render_status(&e)),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "status": e.kind(), "message": e.user_message() })
                ),
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
