//! `rsdeezer-mcp`: serves the Deezer catalog as MCP tools over stdio.
//!
//! stdout carries the protocol, so all logging goes to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rsdeezer::client::Deezer;
use rsdeezer::config::{Config, DEFAULT_BASE_URL};
use rsdeezer::server::DeezerServer;
use rsdeezer::tools::Toolbox;

use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "rsdeezer-mcp", version, about = "Deezer catalog tools for MCP clients")]
struct Args {
    /// Root of the Deezer API
    #[arg(long, env = "DEEZER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// OAuth token, only needed for the current-user endpoint
    #[arg(long, env = "DEEZER_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "DEEZER_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Log filter, e.g. `rsdeezer=debug`
    #[arg(long, env = "RSDEEZER_LOG", default_value = "rsdeezer=info,rsdeezer_mcp=info")]
    log: String,
}

impl Args {
    fn config(&self) -> Config {
        Config::new(&self.base_url)
            .access_token(self.access_token.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(EnvFilter::try_new(&args.log).context("invalid log filter")?)
        .init();

    let deezer = Deezer::new(args.config()).context("failed to build the Deezer client")?;
    info!("using {}", deezer.config().base_url);

    let service = DeezerServer::new(Toolbox::new(deezer))
        .serve(stdio())
        .await
        .context("failed to start the stdio MCP service")?;
    info!("serving tools over stdio");

    let reason = service.waiting().await.context("stdio MCP service failed")?;
    info!("stdio MCP service stopped: {:?}", reason);
    Ok(())
}
