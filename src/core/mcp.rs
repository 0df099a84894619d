//! JSON-RPC envelope shared by the plain `/rpc` endpoint and its tests.

use serde::{Deserialize, Serialize};
use serde_json::Value as J;

use crate::core::error::ToolError;

#[derive(Deserialize, Debug)]
pub struct RpcReq {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: J,
    pub method: String,
    #[serde(default)]
    pub params: J,
}

#[derive(Serialize, Debug, Clone)]
pub struct RpcResp {
    pub jsonrpc: &'static str,
    pub id: J,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<J>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErr>,
}

#[derive(Serialize, Debug, Clone)]
pub struct RpcErr {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<J>,
}

pub fn ok(id: J, result: J) -> RpcResp {
    RpcResp { jsonrpc: "2.0", id, result: Some(result), error: None }
}

pub fn err(id: J, code: i32, msg: impl Into<String>, data: Option<J>) -> RpcResp {
    RpcResp { jsonrpc: "2.0", id, result: None, error: Some(RpcErr { code, message: msg.into(), data }) }
}

pub fn tool_err(id: J, e: &ToolError) -> RpcResp {
    err(id, e.code(), e.to_string(), Some(e.data()))
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub server_info: ServerInfo,
    pub capabilities: J,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl InitializeResult {
    pub fn for_gateway() -> Self {
        Self {
            protocol_version: "2024-11-05".into(),
            server_info: ServerInfo {
                name: env!("CARGO_PKG_NAME").into(),
                version: env!("CARGO_PKG_VERSION").into(),
            },
            capabilities: serde_json::json!({ "tools": {} }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_serializes_initialize_result_in_camel_case() {
        let v = serde_json::to_value(InitializeResult::for_gateway()).unwrap();
        assert_eq!(v["serverInfo"]["name"], "wp-mcp-gateway");
        assert!(v["capabilities"]["tools"].is_object());
    }

    #[test]
    fn tool_err_carries_code_and_kind() {
        let resp = tool_err(J::from(7), &ToolError::UnknownTool("x".into()));
        let e = resp.error.unwrap();
        assert_eq!(e.code, -32601);
        assert_eq!(e.data.unwrap()["kind"], "unknown_tool");
        assert!(resp.result.is_none());
    }
}
