use crate::{
    abstract_trait::dashboard::DynDashboardService,
    domain::response::dashboard::DashboardStatsResponse, state::AppState,
};
use axum::{
    Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Aggregated inventory statistics", body = DashboardStatsResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_dashboard(
    Extension(service): Extension<DynDashboardService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.stats().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn dashboard_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/dashboard", get(get_dashboard))
        .layer(Extension(app_state.di_container.dashboard.clone()))
}
