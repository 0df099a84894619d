use std::net::SocketAddr;

use anyhow::Context;

use crate::infra::config::{Config, WordPressConfig};
use crate::infra::mcp::{make_factory, GatewaySvc};
use crate::tools::dispatch::Dispatcher;

pub async fn run_server(cfg: Config) -> anyhow::Result<()> {
    cfg.validate().map_err(anyhow::Error::msg)?;
    let wordpress = WordPressConfig::load(cfg.config_path.as_deref()).map_err(anyhow::Error::msg)?;
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        rpc_shim = cfg.rpc_shim,
        site_url_configured = wordpress.site_url.is_some(),
        username_configured = wordpress.username.is_some(),
        password_configured = wordpress.password.is_some(),
        "BOOT wp-mcp-gateway"
    );

    let dispatcher = Dispatcher::from_config(wordpress).context("building HTTP client")?;

    // Stdio mode: run MCP over stdio ONLY (no HTTP).
    if cfg.mode == "stdio" {
        let factory = make_factory(GatewaySvc::new(dispatcher));
        crate::infra::runtime::mcp_transport::serve_stdio(factory)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let app = if cfg.rpc_shim {
        crate::infra::http_app::build_app_with_rpc_shim(dispatcher)
    } else {
        crate::infra::http_app::build_app_default(dispatcher)
    };

    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
