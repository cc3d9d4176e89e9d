use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use readhub::application::{ServerConfig, serve};
use readhub::infrastructure::news_api::NEWS_API_URL;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// News and magazine aggregation server.
#[derive(Debug, Parser)]
#[command(name = "readhub", version, about)]
struct Cli {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "READHUB_BIND_ADDRESS", default_value = "0.0.0.0:8080")]
    bind_address: SocketAddr,

    /// API key for the external news provider. Leave unset (or set to the
    /// sample placeholder) to serve demo data only.
    #[arg(long, env = "NEWS_API_KEY", default_value = "")]
    news_api_key: String,

    /// Base URL of the news provider.
    #[arg(long, env = "NEWS_API_URL", default_value = NEWS_API_URL)]
    news_api_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    serve(ServerConfig {
        bind_address: cli.bind_address,
        news_api_url: cli.news_api_url,
        news_api_key: cli.news_api_key,
    })
    .await
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if logging cannot be initialized
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}
