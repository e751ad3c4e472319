use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use anyhow::Context;
use serde_json::Value;
use tracing::{error, info};

use site_globals::globals::fetcher::GlobalFetcher;
use site_globals::observability::telemetry;
use site_globals::{Footer, FooterFetcher, HttpContentBackend, Settings, FOOTER_SLUG};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Could not read .env file: {}", e);
        }
    }
    telemetry::init();

    let slug = env::args().nth(1).unwrap_or_else(|| FOOTER_SLUG.to_string());

    match run(&slug).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(slug: &str) -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    let backend = Arc::new(HttpContentBackend::from_settings(&settings)?);

    info!("Fetching global {:?} from {}", slug, settings.base_url);

    let document = if slug == FOOTER_SLUG {
        let footer: Option<Footer> = FooterFetcher::from_settings(backend, &settings).fetch_footer().await?;
        serde_json::to_value(footer)?
    } else {
        let fetcher = GlobalFetcher::with_request(backend, settings.request_for(slug));
        fetcher.fetch::<Value>().await?.unwrap_or(Value::Null)
    };

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
