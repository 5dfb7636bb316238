//! Gemini API preflight checks.

use crate::models::config::Config;
use crate::preflight::CheckResult;
use crate::services::gemini::GeminiClient;

/// Check that an API key is configured at all.
pub fn check_api_key(config: &Config) -> CheckResult {
    match config.gemini.api_key.as_deref() {
        Some(key) if !key.trim().is_empty() => {
            CheckResult::ok("API key", "GEMINI_API_KEY is configured")
        }
        _ => CheckResult::fail(
            "API key",
            "no API key configured",
            "Set the GEMINI_API_KEY environment variable or add it to config.toml",
        ),
    }
}

/// Check that the Gemini API answers with the configured key.
pub async fn check_reachable(config: &Config) -> CheckResult {
    let client = match GeminiClient::new(config.gemini.clone()) {
        Ok(client) => client,
        Err(e) => {
            return CheckResult::fail(
                "Gemini API",
                &format!("could not build client: {e}"),
                "Check the configured key and timeout",
            )
        }
    };

    match client.health_check().await {
        Ok(true) => CheckResult::ok("Gemini API", "reachable"),
        Ok(false) => CheckResult::fail(
            "Gemini API",
            "the API rejected the request",
            "Verify the API key is valid and has quota remaining",
        ),
        Err(e) => CheckResult::fail(
            "Gemini API",
            &format!("not reachable: {e}"),
            "Check your network connection",
        ),
    }
}
