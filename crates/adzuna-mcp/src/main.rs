//! Adzuna MCP Server
//!
//! Model Context Protocol server exposing Adzuna job search and labour-market
//! data to LLM agents over stdio.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use adzuna_client::config::{APP_ID_ENV, APP_KEY_ENV, DEFAULT_BASE_URL};
use adzuna_client::{AdzunaApiClient, AdzunaApiConfig, Credentials};
use adzuna_mcp::server::AdzunaMcpServer;
use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "adzuna-mcp", version, about = "Adzuna job search MCP server (stdio)")]
struct Args {
    /// Adzuna application id
    #[arg(long, env = APP_ID_ENV, hide_env_values = true)]
    app_id: Option<String>,

    /// Adzuna application key
    #[arg(long, env = APP_KEY_ENV, hide_env_values = true)]
    app_key: Option<String>,

    /// API root URL
    #[arg(long, env = "ADZUNA_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "ADZUNA_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,
}

/// A missing `.env` is normal; credentials may come from the real environment.
fn tolerate_missing_dotenv(loaded: Result<PathBuf, dotenvy::Error>) -> Result<(), dotenvy::Error> {
    match loaded {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tolerate_missing_dotenv(dotenvy::dotenv())?;

    let directive: Directive = "adzuna_mcp=info".parse()?;
    let filter = EnvFilter::from_default_env().add_directive(directive);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let credentials = Credentials::new(
        args.app_id.unwrap_or_default(),
        args.app_key.unwrap_or_default(),
    )?;
    let timeout_ms = u64::try_from(Duration::from_secs(args.timeout_secs).as_millis())?;
    let config = AdzunaApiConfig::new(credentials)
        .with_base_url(args.base_url)
        .with_timeout_ms(timeout_ms);
    let client = AdzunaApiClient::new(config)?;

    tracing::info!(
        base_url = client.base_url(),
        timeout_secs = args.timeout_secs,
        "adzuna-mcp starting (stdio transport)"
    );

    let server = AdzunaMcpServer::new(client);
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
