mod dashboard;
mod movement;
mod product;

use crate::{model::movement::MovementType, state::AppState};
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::json;
use shared::{config::Config, utils::shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::dashboard::dashboard_routes;
pub use self::movement::movement_routes;
pub use self::product::product_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::get_products,
        product::get_product_alerts,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        movement::get_movements,
        movement::create_movement,

        dashboard::get_dashboard,
    ),
    components(schemas(MovementType)),
    tags(
        (name = "Product", description = "Product catalog endpoints"),
        (name = "Movement", description = "Stock movement endpoints"),
        (name = "Dashboard", description = "Dashboard endpoints"),
    )
)]
struct ApiDoc;

pub async fn health_check_handler() -> impl IntoResponse {
    axum::Json(json!({ "status": "ok" }))
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(config: &Config, app_state: AppState) -> axum::Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/health", get(health_check_handler))
            .merge(product_routes(shared_state.clone()))
            .merge(movement_routes(shared_state.clone()))
            .merge(dashboard_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(config))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(config: &Config, app_state: AppState) -> Result<()> {
        let app = Self::build(config, app_state);

        let addr = format!("0.0.0.0:{}", config.port);
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!(
            "📖 Swagger UI: http://localhost:{}/swagger-ui",
            config.port
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
