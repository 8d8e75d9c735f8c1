use bon::Builder;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Topic and formatting preferences for a batch of captions.
///
/// Values for `platform`, `style`, and `length` are usually one of the
/// documented keys, but unknown keys are still accepted by the server.
#[derive(Builder, Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CaptionRequest {
    /// What the captions should be about.
    #[builder(into)]
    pub topic: String,
    /// One of instagram, youtube, twitter, facebook, linkedin, or tiktok.
    #[builder(into)]
    pub platform: String,
    /// One of casual, professional, funny, inspirational, or engaging.
    #[builder(into)]
    pub style: String,
    /// One of short, medium, or long.
    #[builder(into)]
    pub length: String,
}

#[derive(Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct CaptionResponse {
    /// Up to five ready-to-post captions in the order they were generated.
    pub captions: Vec<String>,
    pub success: bool,
}

impl CaptionResponse {
    pub fn new(captions: Vec<String>) -> Self {
        Self {
            captions,
            success: true,
        }
    }
}
