use axum::{
    routing::{any_service, get, post},
    Router,
};
use std::sync::Arc;

use crate::infra::mcp::{make_factory, GatewaySvc};
use crate::infra::runtime::mcp_transport::{make_streamable_http_service, LocalSessionManager};
use crate::tools::dispatch::Dispatcher;

/// `/healthz` + streamable MCP at `/mcp`.
pub fn build_app_default(dispatcher: Dispatcher) -> Router {
    let session_mgr = Arc::new(LocalSessionManager::default());
    let mcp_service =
        make_streamable_http_service(make_factory(GatewaySvc::new(dispatcher)), session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}

/// Default app **plus** the plain JSON-RPC endpoint at `/rpc`.
pub fn build_app_with_rpc_shim(dispatcher: Dispatcher) -> Router {
    let rpc = Router::new()
        .route("/rpc", post(crate::api::mcp::http))
        .with_state(dispatcher.clone());
    build_app_default(dispatcher).merge(rpc)
}
