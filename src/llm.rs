use serde::{Deserialize, Serialize};
use reqwest::Client;
use crate::config::Config;
use crate::error::{Result, AppError};

pub const MODEL: &str = "claude-sonnet-4-20250514";
pub const MAX_TOKENS: u32 = 2048;
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

/// Sends `question` as the single user turn and returns the model's first text block.
pub async fn call_anthropic(client: &Client, config: &Config, question: &str) -> Result<String> {
    let body = MessagesRequest {
        model: MODEL,
        max_tokens: MAX_TOKENS,
        system: &config.system_prompt,
        messages: vec![Message {
            role: "user",
            content: question,
        }],
    };

    // .json() sets content-type: application/json
    let res = client
        .post(&config.anthropic_api_url)
        .header("x-api-key", &config.anthropic_api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&body)
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await?;
        return Err(AppError::Upstream { status: status.as_u16(), body });
    }

    let data: MessagesResponse = res.json().await?;
    first_text(data)
}

fn first_text(data: MessagesResponse) -> Result<String> {
    data.content
        .into_iter()
        .filter(|block| block.kind == "text")
        .find_map(|block| block.text)
        .ok_or_else(|| AppError::InvalidLlmResponse("no text block in content".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> MessagesResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn takes_first_text_block() {
        let data = parse(
            r#"{"content":[{"type":"thinking","thinking":"..."},{"type":"text","text":"one"},{"type":"text","text":"two"}]}"#,
        );
        assert_eq!(first_text(data).unwrap(), "one");
    }

    #[test]
    fn empty_content_is_an_error() {
        let data = parse(r#"{"id":"msg_1","content":[]}"#);
        assert!(matches!(first_text(data), Err(AppError::InvalidLlmResponse(_))));
    }

    #[test]
    fn request_body_shape() {
        let body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system: "sys",
            messages: vec![Message { role: "user", content: "q" }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": MODEL,
                "max_tokens": 2048,
                "system": "sys",
                "messages": [{"role": "user", "content": "q"}]
            })
        );
    }
}
