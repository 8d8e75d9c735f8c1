use axum::{
    body::Bytes,
    extract::State,
    http::header::{self, HeaderName},
    response::Json,
};
use capgen::{CaptionRequest, CaptionResponse};
use serde_json::Value;
use tracing::{debug, info};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    client::ModelClient,
    models::{
        prompts::{CaptionPrompt, UserPrompt, split_captions},
        request::parse_caption_request,
        state::CaptionState,
    },
    utils::{self, CaptionError},
};

type CorsHeaders = [(HeaderName, &'static str); 2];

const CORS_HEADERS: CorsHeaders = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
];

pub fn router(state: CaptionState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(generate_caption))
        .with_state(state)
}

/// Generate up to five social media captions about a topic.
///
/// The platform, style, and length select phrases that steer the tone and
/// size of the captions. Unknown values are passed along as-is, and
/// non-string values are rendered to text.
#[utoipa::path(
    post,
    path = "/generate-caption",
    request_body = CaptionRequest,
    responses(
        (status = 200, description = "Successfully generated captions", body = CaptionResponse),
        (status = 400, description = "One or more required parameters are missing or empty"),
        (status = 405, description = "Only POST is supported"),
        (status = 500, description = "Invalid or null request JSON, or an unexpected failure talking to the completion API")
    )
)]
#[axum::debug_handler(state = CaptionState)]
pub async fn generate_caption(
    State(model_client): State<ModelClient>,
    body: Bytes,
) -> Result<(CorsHeaders, Json<CaptionResponse>), CaptionError> {
    // Unparsable JSON is an internal error, while missing fields are a bad
    // request.
    let value: Value = serde_json::from_slice(&body).map_err(utils::internal_error)?;
    let request = parse_caption_request(value)?;

    debug!(
        "generating captions (platform={} style={} length={})",
        request.platform, request.style, request.length
    );
    let completion_request =
        CaptionPrompt { request: &request }.to_completion_request(model_client.config());
    let content = model_client.generate(completion_request).await?;
    let captions = split_captions(&content);
    info!("generated {} caption(s)", captions.len());
    Ok((CORS_HEADERS, Json(CaptionResponse::new(captions))))
}

/// Used for every route when the method doesn't match.
pub async fn method_not_allowed() -> CaptionError {
    CaptionError::MethodNotAllowed
}
