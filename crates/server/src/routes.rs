pub mod categories;
pub mod health;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa_swagger_ui::SwaggerUi;

use service::categories::{CategoriesService, CategoryService, InMemoryCategoryRepository};
use service::healthcheck::{HealthCheck, HealthCheckService};

use crate::openapi::ApiDoc;

/// Shared handler state. Both dependencies sit behind traits so tests can swap them.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryService>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    pub fn new(categories: Arc<dyn CategoryService>, health: Arc<dyn HealthCheck>) -> Self {
        Self { categories, health }
    }

    /// Wire the in-memory repository, optionally pre-seeded.
    pub fn in_memory(seed_defaults: bool, service_name: &str) -> Self {
        let repo = if seed_defaults {
            InMemoryCategoryRepository::with_defaults()
        } else {
            InMemoryCategoryRepository::new()
        };
        let categories = Arc::new(CategoriesService::new(Arc::new(repo)));
        let health = Arc::new(HealthCheckService::new(service_name));
        Self::new(categories, health)
    }
}

/// Category routes relative to the mount point.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/categories/health", get(health::health))
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/:id",
            get(categories::get).put(categories::update).delete(categories::delete),
        )
}

/// Build the full application: API routes under `base_path`, docs, CORS and tracing.
pub fn build_router(state: AppState, base_path: &str) -> Router {
    let api = api_routes().with_state(state);
    let api = if base_path.is_empty() || base_path == "/" {
        api
    } else {
        Router::new().nest(base_path, api)
    };

    let prefix = base_path.trim_end_matches('/');
    let docs = SwaggerUi::new(format!("{prefix}/categories/docs"))
        .url(format!("{prefix}/categories/openapi.json"), ApiDoc::with_base_path(prefix));

    api.merge(docs)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
