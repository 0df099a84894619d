use std::fmt;

use reqwest::Url;
use serde_json::{Map, Value};

/// One request to execute a named tool with an untyped argument bag.
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    pub tool_name: String,
    pub arguments: Map<String, Value>,
}

impl ToolInvocation {
    pub fn new(tool_name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self { tool_name: tool_name.into(), arguments }
    }

    /// Accepts whatever a caller sent as `arguments`; non-objects become empty.
    pub fn from_json(tool_name: impl Into<String>, arguments: &Value) -> Self {
        let arguments = arguments.as_object().cloned().unwrap_or_default();
        Self::new(tool_name, arguments)
    }
}

/// Per-call `siteUrl` / `username` / `password` values.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialOverrides {
    pub site_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for CredentialOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialOverrides")
            .field("site_url", &self.site_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Effective endpoint/identity/secret for a single invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub endpoint: Url,
    pub identity: String,
    pub secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("endpoint", &self.endpoint.as_str())
            .field("identity", &self.identity)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePostArgs {
    pub overrides: CredentialOverrides,
    pub title: String,
    pub content: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPostsArgs {
    pub overrides: CredentialOverrides,
    pub per_page: u64,
    pub page: u64,
}

/// `None` means "leave unchanged"; `Some("")` clears the field remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePostArgs {
    pub overrides: CredentialOverrides,
    pub post_id: u64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
}

/// A validated invocation, one variant per tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    CreatePost(CreatePostArgs),
    GetPosts(GetPostsArgs),
    UpdatePost(UpdatePostArgs),
}

impl ToolCall {
    pub fn overrides(&self) -> &CredentialOverrides {
        match self {
            ToolCall::CreatePost(a) => &a.overrides,
            ToolCall::GetPosts(a) => &a.overrides,
            ToolCall::UpdatePost(a) => &a.overrides,
        }
    }
}
