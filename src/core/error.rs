use thiserror::Error;

/// Every way a tool invocation can fail. Each variant maps to one stable
/// protocol error category at the front-end boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("{0}")]
    InvalidArguments(String),

    /// Lists the unresolved fields, never their values.
    #[error("WordPress credentials not configured; missing: {}", .missing.join(", "))]
    MissingCredentials { missing: Vec<String> },

    #[error("WordPress API error: {message}")]
    RemoteApi {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("WordPress API error: {0}")]
    Transport(String),
}

impl ToolError {
    pub fn missing_arguments(names: &[&str]) -> Self {
        ToolError::InvalidArguments(format!(
            "missing required argument(s): {}",
            names.join(", ")
        ))
    }

    /// JSON-RPC error code used by both front-ends.
    pub fn code(&self) -> i32 {
        match self {
            ToolError::UnknownTool(_) => -32601,
            ToolError::InvalidArguments(_) | ToolError::MissingCredentials { .. } => -32602,
            ToolError::RemoteApi { .. } | ToolError::Transport(_) => -32603,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::UnknownTool(_) => "unknown_tool",
            ToolError::InvalidArguments(_) => "invalid_arguments",
            ToolError::MissingCredentials { .. } => "missing_credentials",
            ToolError::RemoteApi { .. } => "remote_api_error",
            ToolError::Transport(_) => "transport_error",
        }
    }

    /// Structured `data` attached to protocol errors.
    pub fn data(&self) -> serde_json::Value {
        match self {
            ToolError::RemoteApi { status, code, .. } => serde_json::json!({
                "kind": self.kind(),
                "status": status,
                "remoteCode": code,
            }),
            ToolError::MissingCredentials { missing } => serde_json::json!({
                "kind": self.kind(),
                "missing": missing,
            }),
            _ => serde_json::json!({ "kind": self.kind() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_uses_wordpress_phrasing() {
        let e = ToolError::RemoteApi {
            status: 401,
            code: Some("rest_forbidden".into()),
            message: "Invalid credentials".into(),
        };
        assert_eq!(e.to_string(), "WordPress API error: Invalid credentials");
        assert_eq!(e.code(), -32603);
        assert_eq!(e.data()["status"], 401);
        assert_eq!(e.data()["kind"], "remote_api_error");
    }

    #[test]
    fn missing_arguments_names_every_field() {
        let e = ToolError::missing_arguments(&["title", "content"]);
        assert_eq!(e.to_string(), "missing required argument(s): title, content");
        assert_eq!(e.code(), -32602);
    }

    #[test]
    fn missing_credentials_lists_fields() {
        let e = ToolError::MissingCredentials {
            missing: vec!["username (WORDPRESS_USERNAME)".into()],
        };
        assert!(e.to_string().contains("username (WORDPRESS_USERNAME)"));
        assert_eq!(e.kind(), "missing_credentials");
    }

    #[test]
    fn unknown_tool_maps_to_method_not_found() {
        let e = ToolError::UnknownTool("delete_post".into());
        assert_eq!(e.to_string(), "unknown tool: delete_post");
        assert_eq!(e.code(), -32601);
    }
}
