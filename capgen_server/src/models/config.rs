use crate::{models::client::GenerationConfig, utils};
use serde::Deserialize;
use std::default;
use std::fmt;

#[derive(Clone, Deserialize)]
pub struct UserAgent(String);

impl default::Default for UserAgent {
    fn default() -> Self {
        Self("capgen_server".to_string())
    }
}

impl From<String> for UserAgent {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "utils::default_server_binding_addr")]
    pub bind_addr: String,
    #[serde(default, deserialize_with = "utils::deserialize_with_envsubst")]
    pub user_agent: UserAgent,
}

impl default::Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: utils::default_server_binding_addr(),
            user_agent: UserAgent::default(),
        }
    }
}

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct CaptionConfig {
    pub server: ServerConfig,
    pub generation: GenerationConfig,
}
