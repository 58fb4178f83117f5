//! Remote theme retrieval.

use crate::error::CliError;
use sass_theme_core::ThemeDocument;
use std::time::Duration;

/// Default base URL of the theme service.
pub const DEFAULT_API_URL: &str = "https://color.adobe.com/api/v2/themes";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build an HTTP client with timeout applied.
pub fn build_http_client() -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Builds the request URL for one public theme.
///
/// The theme id is percent-encoded as a path segment; the API key travels as
/// a query parameter.
pub fn theme_url(base_url: &str, theme_id: &str, api_key: &str) -> Result<reqwest::Url, CliError> {
    let mut url = reqwest::Url::parse(base_url)
        .map_err(|e| CliError::Input(format!("invalid API URL '{base_url}': {e}")))?;
    url.path_segments_mut()
        .map_err(|_| CliError::Input(format!("API URL '{base_url}' cannot take a path")))?
        .pop_if_empty()
        .push(theme_id);
    url.query_pairs_mut()
        .append_pair("filter", "public")
        .append_pair("metadata", "all")
        .append_pair("x-api-key", api_key);
    Ok(url)
}

/// Fetches and decodes one theme document.
pub async fn fetch_theme(
    http: &reqwest::Client,
    base_url: &str,
    theme_id: &str,
    api_key: &str,
) -> Result<ThemeDocument, CliError> {
    let url = theme_url(base_url, theme_id, api_key)?;
    tracing::info!(theme_id, "fetching theme");

    let response = http.get(url).send().await?;
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(CliError::Network(format!(
            "theme service returned status {status}: {}",
            body.trim()
        )));
    }

    let body = response.text().await?;
    parse_document(&body)
}

/// Decodes a theme document body.
pub fn parse_document(body: &str) -> Result<ThemeDocument, CliError> {
    serde_json::from_str(body)
        .map_err(|e| CliError::Serialization(format!("invalid theme document: {e}")))
}
