//! Runtime configuration served by the bundle host

use gloo_net::http::Request;
use medinest_core::ShellConfig;

const CONFIG_URL: &str = "/api/config";

/// Fetch the shell configuration the host was started with
pub async fn fetch_config() -> Result<ShellConfig, String> {
    let response = Request::get(CONFIG_URL)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch config: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let config: ShellConfig = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse config: {}", e))?;

    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}
