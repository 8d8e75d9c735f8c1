use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};
use tracing::{error, warn};

/// Everything that can go wrong while turning a request into captions.
/// Each variant maps onto one HTTP status and JSON error body.
#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Missing required parameters")]
    BadRequest,
    #[error("Failed to generate captions")]
    Upstream { status: StatusCode, details: Value },
    #[error("Internal server error")]
    Internal(String),
}

impl CaptionError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> Value {
        let error = self.to_string();
        match self {
            Self::MethodNotAllowed | Self::BadRequest => json!({ "error": error }),
            Self::Upstream { details, .. } => json!({ "error": error, "details": details }),
            Self::Internal(message) => json!({ "error": error, "message": message }),
        }
    }
}

impl IntoResponse for CaptionError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::MethodNotAllowed | Self::BadRequest => warn!("rejected request: {self}"),
            Self::Upstream { details, .. } => error!("completion API error ({status}): {details}"),
            Self::Internal(message) => error!("caption generation failed: {message}"),
        }
        (status, Json(self.body())).into_response()
    }
}

/// Map any error into a `500 Internal Server Error` response.
pub fn internal_error<E>(err: E) -> CaptionError
where
    E: std::error::Error,
{
    CaptionError::Internal(err.to_string())
}

pub fn default_server_binding_addr() -> String {
    "127.0.0.1:6969".to_string()
}

pub fn default_base_url() -> String {
    "https://api.siliconflow.cn/v1".to_string()
}

pub fn default_api_key_var() -> String {
    "SILICONFLOW_API_KEY".to_string()
}

pub fn default_model() -> String {
    "Qwen/Qwen2.5-7B-Instruct".to_string()
}

pub fn default_temperature() -> f64 {
    0.8
}

pub fn default_max_tokens() -> u32 {
    1000
}

/// Deserialize a string and expand `${VAR}` references from the environment.
/// Variables that envsubst can't represent are left out of the expansion.
pub fn deserialize_with_envsubst<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw = String::deserialize(deserializer)?;
    let variables: HashMap<String, String> = std::env::vars()
        .filter(|(key, value)| {
            ![key, value]
                .iter()
                .any(|s| s.contains(['$', '{', '}']))
        })
        .collect();
    let expanded = envsubst::substitute(raw, &variables).map_err(serde::de::Error::custom)?;
    Ok(T::from(expanded))
}
