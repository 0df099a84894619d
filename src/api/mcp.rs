//! Plain JSON-RPC endpoint (`/rpc`): one POST per request, no sessions.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value as J};

use crate::core::error::ToolError;
use crate::core::mcp::{InitializeResult, RpcReq, RpcResp};
use crate::domain::ToolInvocation;
use crate::infra::http::json as http_json;
use crate::tools::dispatch::Dispatcher;

fn tools_list(dispatcher: &Dispatcher) -> J {
    let tools: Vec<J> = dispatcher
        .list_tools()
        .iter()
        .map(|t| json!({ "name": t.name, "description": t.description, "inputSchema": t.input_schema() }))
        .collect();
    json!({ "tools": tools })
}

async fn call_tool(dispatcher: &Dispatcher, params: &J) -> Result<J, ToolError> {
    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ToolError::InvalidArguments("missing tool name".into()))?;
    let args = params.get("arguments").unwrap_or(&J::Null);
    let payload = dispatcher.dispatch(ToolInvocation::from_json(name, args)).await?;
    let text = serde_json::to_string_pretty(&payload)
        .map_err(|e| ToolError::Transport(e.to_string()))?;
    Ok(json!({ "content": [{ "type": "text", "text": text }] }))
}

pub async fn http(State(dispatcher): State<Dispatcher>, Json(req): Json<RpcReq>) -> Json<RpcResp> {
    tracing::debug!(method = %req.method, id = ?req.id, "rpc handler invoked");
    let id = req.id.clone();
    let resp = match req.method.as_str() {
        "initialize" => match serde_json::to_value(InitializeResult::for_gateway()) {
            Ok(v) => http_json::ok(id, v).0,
            Err(e) => http_json::error(id, -32603, e.to_string()).0,
        },
        "ping" | "shutdown" => http_json::ok(id, json!({})).0,
        "tools/list" => http_json::ok(id, tools_list(&dispatcher)).0,
        "tools/call" => match call_tool(&dispatcher, &req.params).await {
            Ok(out) => http_json::ok(id, out).0,
            Err(e) => {
                let resp = http_json::from_tool_error(id, &e).0;
                tracing::warn!(response = ?resp, "tools/call error response");
                resp
            }
        },
        _ => http_json::error(id, -32601, format!("unknown method: {}", req.method)).0,
    };
    Json(resp)
}
