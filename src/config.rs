use crate::error::KabuError;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_AUTHORIZATION: &str = "AUTHORIZATION";
pub const ENV_SERVER_URL: &str = "SERVER_URL";

/// Endpoint override so tests can point the dispatcher somewhere else.
pub const ENV_API_BASE: &str = "KABU_API_BASE";

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Credentials required for one analysis run. Loaded once, never mutated.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// OpenAI API key, sent as the bearer token.
    pub api_key: String,
    /// Alpha Vantage API key, forwarded to the MCP server by the LLM service.
    pub authorization: String,
    /// URL of the remote MCP server.
    pub server_url: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self, KabuError> {
        Ok(Self {
            api_key: require_env(ENV_API_KEY)?,
            authorization: require_env(ENV_AUTHORIZATION)?,
            server_url: require_env(ENV_SERVER_URL)?,
        })
    }
}

fn require_env(key: &str) -> Result<String, KabuError> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(KabuError::missing_configuration(key)),
    }
}

/// Base URL of the Responses API, without a trailing slash.
pub fn api_base() -> String {
    let base = std::env::var(ENV_API_BASE).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
    base.trim_end_matches('/').to_string()
}
