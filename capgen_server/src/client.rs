use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    models::{
        client::{CompletionRequest, CompletionResponse, GenerationConfig},
        config::UserAgent,
    },
    utils::{self, CaptionError},
};

#[derive(Clone)]
pub struct ModelClient {
    generation_api_config: GenerationConfig,
    generation_client: reqwest::Client,
}

impl ModelClient {
    pub fn config(&self) -> &GenerationConfig {
        &self.generation_api_config
    }

    /// Send one completion request and return the first choice's content.
    /// Non-success statuses are forwarded along with the provider's error body.
    pub async fn generate(&self, request: CompletionRequest) -> Result<String, CaptionError> {
        let resp: CompletionResponse = self.post("/chat/completions", request).await?;
        resp.into_content().ok_or_else(|| {
            CaptionError::Internal("completion response contained no choices".to_string())
        })
    }

    pub fn new(
        generation_api_config: GenerationConfig,
        user_agent: &UserAgent,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let generation_header_map =
            reqwest::header::HeaderMap::try_from(&generation_api_config.headers)?;
        let generation_client = reqwest::Client::builder()
            .default_headers(generation_header_map)
            .user_agent(user_agent.to_string())
            .build()?;
        Ok(Self {
            generation_api_config,
            generation_client,
        })
    }

    async fn post<Request: serde::ser::Serialize, ResponseModel: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        request: Request,
    ) -> Result<ResponseModel, CaptionError> {
        let config = &self.generation_api_config;
        let base_url = config.base_url.trim_end_matches("/");
        let url = format!("{base_url}{endpoint}");

        // Extra JSON from the config is merged over the typed request body.
        let mut body = serde_json::to_value(request).map_err(utils::internal_error)?;
        if let Some(fields) = body.as_object_mut() {
            fields.extend(
                config
                    .json
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone())),
            );
        }

        // The key is looked up per request so it can be rotated without a
        // restart. A missing key is left for the provider to reject.
        let api_key = dotenvy::var(&config.api_key_var).unwrap_or_else(|_| {
            warn!("{} is not set", config.api_key_var);
            String::new()
        });

        debug!("sending completion request to {url}");
        let response = self
            .generation_client
            .post(url)
            .query(&config.params)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(utils::internal_error)?;

        let status = response.status();
        if !status.is_success() {
            let details = response
                .json::<Value>()
                .await
                .map_err(utils::internal_error)?;
            return Err(CaptionError::Upstream { status, details });
        }

        debug!("parsing completion response");
        response
            .json::<ResponseModel>()
            .await
            .map_err(utils::internal_error)
    }
}
