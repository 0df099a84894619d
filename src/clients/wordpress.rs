use std::fmt;
use std::time::Instant;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::{Client, StatusCode, Url};
use serde_json::{json, Map, Value};

use crate::core::error::ToolError;
use crate::domain::{Credentials, ToolCall};
use crate::infra::config::WordPressConfig;
use crate::infra::http::headers::add_standard_headers;
use crate::infra::runtime::limits::make_http_client_with;

const API_PREFIX: [&str; 3] = ["wp-json", "wp", "v2"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A fully built call against the posts collection. One per invocation.
#[derive(Clone, PartialEq)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    /// Path below `/wp-json/wp/v2`, e.g. `/posts/5`.
    pub path: String,
    pub url: Url,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
    pub authorization: String,
}

impl fmt::Debug for OutboundRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutboundRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("query", &self.query)
            .field("body", &self.body)
            .field("authorization", &"<redacted>")
            .finish()
    }
}

pub fn basic_auth(identity: &str, secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{identity}:{secret}")))
}

/// Map a validated call plus resolved credentials to exactly one request.
pub fn build_request(creds: &Credentials, call: &ToolCall) -> Result<OutboundRequest, ToolError> {
    let (method, segments, query, body) = match call {
        ToolCall::CreatePost(a) => (
            HttpMethod::Post,
            vec!["posts".to_owned()],
            Vec::new(),
            Some(json!({
                "title": a.title,
                "content": a.content,
                "status": a.status,
            })),
        ),
        ToolCall::GetPosts(a) => (
            HttpMethod::Get,
            vec!["posts".to_owned()],
            vec![("per_page", a.per_page.to_string()), ("page", a.page.to_string())],
            None,
        ),
        ToolCall::UpdatePost(a) => {
            let mut body = Map::new();
            for (key, value) in [("title", &a.title), ("content", &a.content), ("status", &a.status)] {
                if let Some(v) = value {
                    body.insert(key.to_owned(), Value::String(v.clone()));
                }
            }
            (
                HttpMethod::Post,
                vec!["posts".to_owned(), a.post_id.to_string()],
                Vec::new(),
                Some(Value::Object(body)),
            )
        }
    };

    Ok(OutboundRequest {
        method,
        path: format!("/{}", segments.join("/")),
        url: api_url(&creds.endpoint, &segments)?,
        query,
        body,
        authorization: basic_auth(&creds.identity, &creds.secret),
    })
}

fn api_url(endpoint: &Url, segments: &[String]) -> Result<Url, ToolError> {
    let mut url = endpoint.clone();
    url.set_query(None);
    url.set_fragment(None);
    // Userinfo in siteUrl would leak into logs and error text.
    let _ = url.set_username("");
    let _ = url.set_password(None);
    url.path_segments_mut()
        .map_err(|_| ToolError::InvalidArguments("siteUrl must be an absolute http(s) URL".into()))?
        .pop_if_empty()
        .extend(API_PREFIX)
        .extend(segments);
    Ok(url)
}

/// Seam between the dispatcher and the network.
#[async_trait]
pub trait PostsTransport: Send + Sync {
    /// Returns the 2xx JSON body unmodified.
    async fn send(&self, request: OutboundRequest) -> Result<Value, ToolError>;
}

#[derive(Clone)]
pub struct WordPressRemote {
    http: Client,
}

impl WordPressRemote {
    pub fn new() -> reqwest::Result<Self> {
        Self::from_config(&WordPressConfig::default())
    }

    pub fn from_config(cfg: &WordPressConfig) -> reqwest::Result<Self> {
        Ok(Self { http: make_http_client_with(cfg)? })
    }
}

#[async_trait]
impl PostsTransport for WordPressRemote {
    async fn send(&self, request: OutboundRequest) -> Result<Value, ToolError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(request.url.clone()),
            HttpMethod::Post => self.http.post(request.url.clone()),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let (builder, rid) = add_standard_headers(
            builder.header(reqwest::header::AUTHORIZATION, request.authorization.as_str()),
            None,
        );
        tracing::debug!(method = ?request.method, url = %request.url, request_id = %rid, "wordpress request");

        let start = Instant::now();
        let res = execute(builder).await;

        crate::infra::logging::log_metric(
            "wordpress",
            "remote_latency_ms",
            start.elapsed().as_millis() as f64,
        );
        if let Err(e) = &res {
            tracing::warn!(request_id = %rid, kind = e.kind(), error = %e, "wordpress request failed");
            crate::infra::logging::log_metric("wordpress", "remote_error_total", 1.0);
        }
        res
    }
}

async fn execute(builder: reqwest::RequestBuilder) -> Result<Value, ToolError> {
    let resp = builder.send().await.map_err(transport_error)?;
    let status = resp.status();
    let bytes = resp.bytes().await.map_err(transport_error)?;
    if !status.is_success() {
        return Err(remote_error(status, &bytes));
    }
    serde_json::from_slice::<Value>(&bytes)
        .map_err(|e| ToolError::Transport(format!("invalid JSON from WordPress: {e}")))
}

fn transport_error(e: reqwest::Error) -> ToolError {
    if e.is_timeout() {
        return ToolError::Transport("request timed out".into());
    }
    let connect = e.is_connect();
    let e = e.without_url();
    if connect {
        ToolError::Transport(format!("connection failed: {e}"))
    } else {
        ToolError::Transport(e.to_string())
    }
}

/// WordPress reports failures as `{"code": "...", "message": "...", "data": {"status": N}}`.
fn remote_error(status: StatusCode, body: &[u8]) -> ToolError {
    let payload: Option<Value> = serde_json::from_slice(body).ok();
    let field = |name: &str| {
        payload
            .as_ref()
            .and_then(|p| p.get(name))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };
    ToolError::RemoteApi {
        status: status.as_u16(),
        code: field("code"),
        message: field("message").unwrap_or_else(|| format!("upstream status {status}")),
    }
}
