use std::fs::File;

use axum::Router;
use ctrlc::set_handler;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub mod client;
pub mod models;
pub mod routes;
pub mod utils;

#[derive(OpenApi)]
#[openapi(info(
    title = "Caption Generator",
    description = "Turns a topic into ready-to-post social media captions"
))]
struct ApiDoc;

type BindingAddress = String;

/// Read the config file named by `CAPGEN_CONFIG_PATH`, or fall back to
/// defaults when it isn't set.
pub fn load_config() -> Result<models::config::CaptionConfig, Box<dyn std::error::Error>> {
    match dotenvy::var("CAPGEN_CONFIG_PATH") {
        Ok(config_path) => {
            info!("loading config from {config_path}");
            let config_file = File::open(config_path)?;
            Ok(serde_json::from_reader(config_file)?)
        }
        Err(_) => Ok(models::config::CaptionConfig::default()),
    }
}

/// Build the shared server state from an already loaded config.
pub fn build_state(
    config: models::config::CaptionConfig,
) -> Result<(BindingAddress, models::state::CaptionState), Box<dyn std::error::Error>> {
    let models::config::CaptionConfig { server, generation } = config;
    let model_client = client::ModelClient::new(generation, &server.user_agent)?;
    let state = models::state::CaptionState { model_client };
    Ok((server.bind_addr, state))
}

pub fn init() -> Result<(BindingAddress, models::state::CaptionState), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    let config = load_config()?;
    build_state(config)
}

/// The full application router: the caption endpoint, its OpenAPI docs, a
/// JSON 405 for unsupported methods, and request tracing.
pub fn app(state: models::state::CaptionState) -> Router {
    let openapi_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::captions::router(state));
    let (router, api) = openapi_router.split_for_parts();
    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .method_not_allowed_fallback(routes::captions::method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
}
