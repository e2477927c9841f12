use std::sync::OnceLock;

use reqwest::Client;

const USER_AGENT: &str = concat!("sentiment-analyzer/", env!("CARGO_PKG_VERSION"));
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

pub fn join_base_path(base: &str, path: &str) -> anyhow::Result<String> {
    if base.trim().is_empty() {
        anyhow::bail!("base_url is empty");
    }
    let normalized_base = base.trim_end_matches('/');
    let normalized_path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    Ok(format!("{normalized_base}{normalized_path}"))
}

fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(USER_AGENT).build()
}

/// Process-wide client; built on first use and shared afterwards.
pub(crate) fn http_client() -> anyhow::Result<&'static Client> {
    if let Some(client) = HTTP_CLIENT.get() {
        return Ok(client);
    }
    let client = build_http_client()?;
    Ok(HTTP_CLIENT.get_or_init(move || client))
}
