use axum::Json;

use crate::core::error::ToolError;
use crate::core::mcp::{err as rpc_err, ok as rpc_ok, tool_err, RpcResp};

pub fn ok(id: serde_json::Value, result: serde_json::Value) -> Json<RpcResp> {
    Json(rpc_ok(id, result))
}

pub fn error(id: serde_json::Value, code: i32, message: impl Into<String>) -> Json<RpcResp> {
    Json(rpc_err(id, code, message, None))
}

/// Map a ToolError into its JSON-RPC error with code and `data.kind`.
pub fn from_tool_error(id: serde_json::Value, err: &ToolError) -> Json<RpcResp> {
    Json(tool_err(id, err))
}
