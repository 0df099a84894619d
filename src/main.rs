use clap::Parser;

use wp_mcp_gateway::cli::Cli;
use wp_mcp_gateway::infra::{self, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    infra::logging::init();

    let cfg = Cli::parse().apply(Config::from_env());
    infra::boot::run_server(cfg).await
}
