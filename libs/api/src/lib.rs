use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use query::Client;
use toml::{map::Map, Value};
use tower_http::cors::CorsLayer;
use tracing::info;
use util::{config_integer, config_str, load_config};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;
use utoipauto::utoipauto;

pub mod calendar;
pub mod healthz;
pub mod list;
pub mod not_found;
pub mod post;
mod response;
pub mod vote;

pub use response::{ApiError, ApiResponse, Screen};

#[derive(Clone, Debug)]
pub struct ApiState {
    client: Client,
    config: Config,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub network: String,
    pub lists: Lists,
    pub allow_origin: String,
}

/// Post type and topic ids the list screens query with.
#[derive(Clone, Debug)]
pub struct Lists {
    pub post_type: i64,
    pub tips_topic: i64,
    pub child_bounties_topic: i64,
    pub referenda_topic: i64,
    pub proposals_topic: i64,
    pub limit: i64,
}

pub async fn serve(config_name: &str) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    let config = load_config(config_name)?;
    let query_config = query::init_config(&config)?;
    let client = Client::new(&query_config)?;

    router(client, init_config(&config)?)
}

pub fn router(client: Client, config: Config) -> anyhow::Result<Router> {
    #[utoipauto(paths = "./libs/api/src, ./libs/view/src from view")]
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "chainboard", description = "Governance feed screens")
        )
    )]
    struct ApiDoc;

    let origin = config.allow_origin.parse::<HeaderValue>()?;
    let state = ApiState { client, config };

    // lists
    let list_router = Router::new()
        .route("/tips", get(list::get_tips))
        .route("/child-bounties", get(list::get_child_bounties))
        .route("/referenda", get(list::get_referenda))
        .route("/proposals", get(list::get_proposals))
        .route("/referenda/:id/votes/:voter", get(vote::get_vote))
        .with_state(state.clone());

    // posts
    let post_router = Router::new()
        .route("/", get(post::get_post_without_id))
        .route("/:id", get(post::get_post))
        .route("/:id/refetch", post(post::refetch_post))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // calendar
    let calendar_router = Router::new()
        .route("/", get(calendar::get_calendar))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/healthz", get(healthz::get_health))
        .merge(list_router)
        .nest("/posts", post_router)
        .nest("/calendar", calendar_router)
        .layer(CorsLayer::new().allow_origin(origin))
        .fallback(not_found::get_404);

    Ok(router)
}

pub fn init_config(config: &Map<String, Value>) -> anyhow::Result<Config> {
    let lists = Lists {
        post_type: config_integer(config, "lists", "post_type")?,
        tips_topic: config_integer(config, "lists", "tips_topic")?,
        child_bounties_topic: config_integer(
            config,
            "lists",
            "child_bounties_topic",
        )?,
        referenda_topic: config_integer(config, "lists", "referenda_topic")?,
        proposals_topic: config_integer(config, "lists", "proposals_topic")?,
        limit: config_integer(config, "lists", "limit")
            .unwrap_or(query::documents::DEFAULT_LIMIT),
    };

    Ok(Config {
        network: config_str(config, "network", "name")?,
        allow_origin: config_str(config, "server", "allow_origin")?,
        lists,
    })
}
