//! Tool invocation → validated call → credentials → one HTTP request → result.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use crate::clients::wordpress::{build_request, PostsTransport, WordPressRemote};
use crate::core::error::ToolError;
use crate::core::tool::ToolDefinition;
use crate::domain::ToolInvocation;
use crate::infra::config::WordPressConfig;
use crate::tools::registry::{self, ToolKind};
use crate::tools::{args, credentials};

/// Stateless across invocations; cheap to clone.
#[derive(Clone)]
pub struct Dispatcher {
    defaults: WordPressConfig,
    transport: Arc<dyn PostsTransport>,
}

impl Dispatcher {
    pub fn new(defaults: WordPressConfig, transport: Arc<dyn PostsTransport>) -> Self {
        Self { defaults, transport }
    }

    pub fn from_config(defaults: WordPressConfig) -> reqwest::Result<Self> {
        let remote = WordPressRemote::from_config(&defaults)?;
        Ok(Self::new(defaults, Arc::new(remote)))
    }

    pub fn list_tools(&self) -> &'static [ToolDefinition] {
        registry::list()
    }

    pub async fn dispatch(&self, invocation: ToolInvocation) -> Result<Value, ToolError> {
        let start = Instant::now();
        let kind = ToolKind::from_name(&invocation.tool_name);
        let label = kind.map_or("unknown", ToolKind::name);

        let res = match kind {
            Some(kind) => self.run(kind, &invocation).await,
            None => Err(ToolError::UnknownTool(invocation.tool_name.clone())),
        };

        let elapsed_ms = start.elapsed().as_millis() as f64;
        match &res {
            Ok(_) => tracing::info!(tool = label, elapsed_ms, "tool call succeeded"),
            Err(e) => {
                tracing::warn!(tool = label, kind = e.kind(), error = %e, elapsed_ms, "tool call failed");
                crate::infra::logging::log_metric(label, "dispatch_error_total", 1.0);
            }
        }
        crate::infra::logging::log_metric(label, "dispatch_latency_ms", elapsed_ms);
        res
    }

    async fn run(&self, kind: ToolKind, invocation: &ToolInvocation) -> Result<Value, ToolError> {
        let call = args::validate(kind, &invocation.arguments)?;
        tracing::debug!(tool = kind.name(), ?call, "arguments validated");

        let creds = credentials::resolve(call.overrides(), &self.defaults)?;
        let request = build_request(&creds, &call)?;
        tracing::debug!(tool = kind.name(), ?request, "issuing request");

        self.transport.send(request).await
    }
}
