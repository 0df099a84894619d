//! Generic MCP transport helpers (stdio + streamable HTTP) decoupled from tool logic.

use std::sync::Arc;

use rmcp::serve_server;
use rmcp::transport::streamable_http_server::tower::{StreamableHttpServerConfig, StreamableHttpService};

pub use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
pub use rmcp::ServerHandler;

/// Serve one MCP session over stdin/stdout until the peer goes away.
pub async fn serve_stdio<H>(
    factory: impl FnOnce() -> H,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    H: ServerHandler,
{
    let handler = factory();
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();
    let running = serve_server(handler, (stdin, stdout)).await?;
    let reason = running.waiting().await?;
    tracing::info!(?reason, "stdio session closed");
    Ok(())
}

pub fn make_streamable_http_service<H>(
    factory: impl Fn() -> H + Send + Sync + Clone + 'static,
    session_mgr: Arc<LocalSessionManager>,
) -> StreamableHttpService<H, LocalSessionManager>
where
    H: ServerHandler,
{
    let cfg = StreamableHttpServerConfig::default();
    tracing::debug!(stateful_mode = %cfg.stateful_mode, keep_alive = ?cfg.sse_keep_alive, "StreamableHttpServerConfig");
    let service_factory = move || Ok(factory());
    StreamableHttpService::new(service_factory, session_mgr, cfg)
}
