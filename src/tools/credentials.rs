use reqwest::Url;

use crate::core::error::ToolError;
use crate::domain::{CredentialOverrides, Credentials};
use crate::infra::config::{WordPressConfig, ENV_PASSWORD, ENV_SITE_URL, ENV_USERNAME};

/// Merge call overrides over process defaults, field by field.
///
/// A blank override falls back to the default. Every unresolved field is
/// reported at once; values are never echoed back.
pub fn resolve(
    overrides: &CredentialOverrides,
    defaults: &WordPressConfig,
) -> Result<Credentials, ToolError> {
    let site_url = pick(&overrides.site_url, &defaults.site_url);
    let username = pick(&overrides.username, &defaults.username);
    let password = pick(&overrides.password, &defaults.password);

    let mut missing = Vec::new();
    if site_url.is_none() {
        missing.push(format!("siteUrl ({ENV_SITE_URL})"));
    }
    if username.is_none() {
        missing.push(format!("username ({ENV_USERNAME})"));
    }
    if password.is_none() {
        missing.push(format!("password ({ENV_PASSWORD})"));
    }

    match (site_url, username, password) {
        (Some(site_url), Some(identity), Some(secret)) => Ok(Credentials {
            endpoint: parse_endpoint(site_url)?,
            identity: identity.to_owned(),
            secret: secret.to_owned(),
        }),
        _ => Err(ToolError::MissingCredentials { missing }),
    }
}

fn pick<'a>(call: &'a Option<String>, default: &'a Option<String>) -> Option<&'a str> {
    let non_blank = |v: &'a Option<String>| v.as_deref().filter(|s| !s.trim().is_empty());
    non_blank(call).or_else(|| non_blank(default))
}

fn parse_endpoint(raw: &str) -> Result<Url, ToolError> {
    let url = Url::parse(raw).map_err(|e| {
        ToolError::InvalidArguments(format!("siteUrl is not a valid URL: {e}"))
    })?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ToolError::InvalidArguments(
            "siteUrl must be an absolute http(s) URL".into(),
        ));
    }
    Ok(url)
}
