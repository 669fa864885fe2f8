//! Shared helper functions for MCP tool implementations.

use adzuna_client::{ClientError, ClientResult};
use serde_json::Value;

/// Build a structured error JSON string that LLMs can parse.
pub fn error_json(error_code: &str, message: &str, status: Option<u16>) -> String {
    serde_json::json!({
        "error": error_code,
        "message": message,
        "status": status,
    })
    .to_string()
}

/// Stable error code for each client failure class.
pub fn error_code(error: &ClientError) -> &'static str {
    match error {
        ClientError::ApiError { .. } => "api_error",
        ClientError::Timeout { .. } => "timeout",
        ClientError::HttpError(_) => "transport_error",
        ClientError::SerializationError(_) => "invalid_response",
        ClientError::ConfigError(_) | ClientError::UrlError(_) => "configuration_error",
    }
}

/// Render a relayed API result as tool output.
///
/// Success is the upstream JSON, pretty-printed and otherwise untouched.
/// Failures become an error JSON payload carrying the upstream status.
pub fn render_result(tool: &str, result: ClientResult<Value>) -> Result<String, String> {
    match result {
        Ok(body) => serde_json::to_string_pretty(&body)
            .map_err(|e| error_json("serialization_error", &e.to_string(), None)),
        Err(e) => {
            tracing::warn!(tool, error = %e, "Tool call failed");
            Err(error_json(error_code(&e), &e.to_string(), e.status()))
        }
    }
}
