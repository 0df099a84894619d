use crate::infra::config::WordPressConfig;

/// Build a reqwest client with the configured timeouts. Redirects follow
/// reqwest's default policy, which drops `Authorization` across hosts.
pub fn make_http_client_with(cfg: &WordPressConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(cfg.connect_timeout())
        .timeout(cfg.timeout())
        .build()
}
