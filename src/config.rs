use std::env;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use crate::error::{AppError, Result};
use crate::prompt::SYSTEM_PROMPT;

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub anthropic_api_key: String,
    pub anthropic_api_url: String,
    /// Instruction text sent as `system` with every question.
    pub system_prompt: Arc<str>,
    pub strict_answer_shape: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // A missing key is not fatal; the provider rejects the call instead
        let anthropic_api_key = env::var("ANTHROPIC_API_KEY").unwrap_or_default();
        if anthropic_api_key.is_empty() {
            tracing::warn!("ANTHROPIC_API_KEY is not set, AI calls will fail");
        }

        let anthropic_api_url =
            env::var("ANTHROPIC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let server_addr = parse_addr(&host, &port)?;

        let system_prompt = match env::var("SYSTEM_PROMPT_PATH") {
            Ok(path) => load_prompt(&path)?,
            Err(env::VarError::NotPresent) => Arc::from(SYSTEM_PROMPT),
            Err(e) => return Err(e.into()),
        };

        let strict_answer_shape = match env::var("STRICT_ANSWER_SHAPE") {
            Ok(value) => parse_bool(&value)?,
            Err(_) => false,
        };

        Ok(Config {
            server_addr,
            anthropic_api_key,
            anthropic_api_url,
            system_prompt,
            strict_answer_shape,
        })
    }

    /// Configuration pointing at an arbitrary messages endpoint, with the built-in prompt.
    pub fn for_endpoint(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Config {
            server_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            anthropic_api_key: api_key.into(),
            anthropic_api_url: api_url.into(),
            system_prompt: Arc::from(SYSTEM_PROMPT),
            strict_answer_shape: false,
        }
    }
}

fn parse_addr(host: &str, port: &str) -> Result<SocketAddr> {
    let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
    let ip = IpAddr::from_str(host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;
    Ok(SocketAddr::new(ip, port))
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(AppError::ConfigError(format!("Invalid boolean: {}", other))),
    }
}

fn load_prompt(path: &str) -> Result<Arc<str>> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::ConfigError(format!("Cannot read system prompt {}: {}", path, e)))?;
    if text.trim().is_empty() {
        return Err(AppError::ConfigError(format!("System prompt {} is empty", path)));
    }
    Ok(Arc::from(text))
}
