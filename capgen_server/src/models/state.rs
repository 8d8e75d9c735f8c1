use crate::client::ModelClient;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct CaptionState {
    pub model_client: ModelClient,
}

impl FromRef<CaptionState> for ModelClient {
    fn from_ref(state: &CaptionState) -> ModelClient {
        state.model_client.clone()
    }
}
