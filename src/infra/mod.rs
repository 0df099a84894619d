pub mod boot;
pub mod config;
pub mod http_app;
pub mod logging;
pub mod mcp;
pub mod http {
    pub mod headers;
    pub mod json;
}
pub mod runtime {
    pub mod limits;
    pub mod mcp_transport;
}
