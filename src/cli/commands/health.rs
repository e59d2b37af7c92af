use anyhow::Context;
use serde_json::Value;

use crate::cli::utils::{output_error, output_success};
use crate::cli::OutputFormat;
use crate::config::AppConfig;

pub async fn handle(config: AppConfig, url: Option<String>, output_format: OutputFormat) -> anyhow::Result<()> {
    let base = url.unwrap_or_else(|| format!("http://{}", config.server.bind_address()));
    let endpoint = url::Url::parse(&base)
        .and_then(|base| base.join("/health"))
        .with_context(|| format!("invalid server URL {}", base))?;

    let response = reqwest::get(endpoint.clone())
        .await
        .with_context(|| format!("failed to reach {}", endpoint))?;
    let status = response.status();
    let body: Value = response.json().await.context("health response was not JSON")?;

    if status.is_success() {
        output_success(output_format, &format!("{} is healthy", base), Some(body))
    } else {
        output_error(output_format, &format!("{} reported {}", base, status), Some(body))?;
        anyhow::bail!("server unhealthy")
    }
}
