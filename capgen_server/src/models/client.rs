use std::collections::HashMap;

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils;

/// Caption prompts are always a single user turn.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

/// Body sent to an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Builder, Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub max_tokens: u32,
    #[builder(default)]
    pub stream: bool,
}

#[derive(Deserialize)]
pub struct CompletionMessage {
    pub content: String,
}

#[derive(Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

impl CompletionResponse {
    /// Content of the first choice, if the provider returned any.
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
    }
}

/// Where and how to reach the completion provider.
#[derive(Clone, Deserialize)]
pub struct GenerationConfig {
    #[serde(
        default = "utils::default_base_url",
        deserialize_with = "utils::deserialize_with_envsubst"
    )]
    pub base_url: String,
    /// Name of the environment variable holding the bearer token. The
    /// variable is read on every request, not at startup.
    #[serde(default = "utils::default_api_key_var")]
    pub api_key_var: String,
    #[serde(default = "utils::default_model")]
    pub model: String,
    #[serde(default = "utils::default_temperature")]
    pub temperature: f64,
    #[serde(default = "utils::default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub params: HashMap<String, String>,
    #[serde(default)]
    pub json: HashMap<String, Value>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: utils::default_base_url(),
            api_key_var: utils::default_api_key_var(),
            model: utils::default_model(),
            temperature: utils::default_temperature(),
            max_tokens: utils::default_max_tokens(),
            headers: HashMap::new(),
            params: HashMap::new(),
            json: HashMap::new(),
        }
    }
}
