//! MCP server integration (Streamable HTTP + stdio) for wp-mcp-gateway.

use std::sync::Arc;

use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, Content, ErrorCode, JsonObject, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler,
};

use crate::core::error::ToolError;
use crate::domain::ToolInvocation;
use crate::tools::dispatch::Dispatcher;
use crate::tools::registry;

/// The MCP server handler.
#[derive(Clone)]
pub struct GatewaySvc {
    dispatcher: Dispatcher,
}

impl GatewaySvc {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn tools() -> Vec<Tool> {
        registry::list()
            .iter()
            .map(|def| Tool::new(def.name, def.description, Arc::new(def.input_schema())))
            .collect()
    }

    pub async fn call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = name, "tools/call invoked");
        let invocation = ToolInvocation::new(name, arguments.unwrap_or_default());
        let payload = self
            .dispatcher
            .dispatch(invocation)
            .await
            .map_err(|e| to_mcp_error(&e))?;
        let text = serde_json::to_string_pretty(&payload)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

pub fn to_mcp_error(e: &ToolError) -> McpError {
    McpError::new(ErrorCode(e.code()), e.to_string(), Some(e.data()))
}

impl ServerHandler for GatewaySvc {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Create, list and update WordPress posts. Credentials come from \
                 WORDPRESS_SITE_URL / WORDPRESS_USERNAME / WORDPRESS_PASSWORD or the \
                 siteUrl / username / password arguments."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: Self::tools(),
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.call(&request.name, request.arguments).await
    }
}

/// Factory required by the rmcp transports: hands out clones of one handler.
pub fn make_factory(svc: GatewaySvc) -> impl Fn() -> GatewaySvc + Clone + Send + Sync + 'static {
    move || svc.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::wordpress::{OutboundRequest, PostsTransport};
    use crate::infra::config::WordPressConfig;
    use serde_json::{json, Value as JsonValue};

    struct Canned(Result<JsonValue, ToolError>);

    #[async_trait::async_trait]
    impl PostsTransport for Canned {
        async fn send(&self, _request: OutboundRequest) -> Result<JsonValue, ToolError> {
            self.0.clone()
        }
    }

    fn svc(reply: Result<JsonValue, ToolError>) -> GatewaySvc {
        let defaults = WordPressConfig {
            site_url: Some("https://blog.example".into()),
            username: Some("u".into()),
            password: Some("p".into()),
            ..Default::default()
        };
        GatewaySvc::new(Dispatcher::new(defaults, Arc::new(Canned(reply))))
    }

    fn args(v: JsonValue) -> Option<JsonObject> {
        v.as_object().cloned()
    }

    #[test]
    fn tools_advertise_catalog_with_schemas() {
        let tools = GatewaySvc::tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, vec!["create_post", "get_posts", "update_post"]);
        assert_eq!(tools[2].input_schema["required"], json!(["postId"]));
    }

    #[tokio::test]
    async fn success_is_pretty_json_text() {
        let payload = json!({"id":42,"title":{"rendered":"Hello"}});
        let out = svc(Ok(payload.clone()))
            .call("create_post", args(json!({"title":"Hello","content":"World"})))
            .await
            .expect("tool should succeed");

        let v = serde_json::to_value(&out).unwrap();
        assert_eq!(v["content"][0]["type"], "text");
        let text = v["content"][0]["text"].as_str().unwrap();
        assert_eq!(text, serde_json::to_string_pretty(&payload).unwrap());
        assert_ne!(v["isError"], json!(true));
    }

    #[tokio::test]
    async fn unknown_tool_is_method_not_found() {
        let err = svc(Ok(json!({}))).call("delete_post", None).await.unwrap_err();
        assert_eq!(err.code.0, -32601);
        assert_eq!(err.data.unwrap()["kind"], "unknown_tool");
    }

    #[tokio::test]
    async fn missing_title_is_invalid_params() {
        let err = svc(Ok(json!({})))
            .call("create_post", args(json!({"content":"c"})))
            .await
            .unwrap_err();
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("title"), "got: {}", err.message);
    }

    #[tokio::test]
    async fn remote_errors_keep_wordpress_message() {
        let err = svc(Err(ToolError::RemoteApi {
            status: 401,
            code: None,
            message: "Invalid credentials".into(),
        }))
        .call("get_posts", None)
        .await
        .unwrap_err();
        assert_eq!(err.code.0, -32603);
        assert_eq!(err.message, "WordPress API error: Invalid credentials");
        assert_eq!(err.data.unwrap()["status"], 401);
    }

    #[test]
    fn server_info_enables_tools() {
        let info = svc(Ok(json!({}))).get_info();
        assert!(info.capabilities.tools.is_some());
    }
}
