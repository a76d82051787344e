use crate::{
    abstract_trait::movement::service::{DynMovementCommandService, DynMovementQueryService},
    domain::{
        requests::movement::{CreateMovementRequest, FindAllMovements},
        response::movement::MovementResponse,
    },
    middleware::validate::{SimpleValidatedJson, SimpleValidatedQuery},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/movements",
    tag = "Movement",
    params(FindAllMovements),
    responses(
        (status = 200, description = "Movement history, newest first", body = Vec<MovementResponse>),
        (status = 400, description = "Invalid filter"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_movements(
    Extension(service): Extension<DynMovementQueryService>,
    SimpleValidatedQuery(params): SimpleValidatedQuery<FindAllMovements>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/movements",
    tag = "Movement",
    request_body = CreateMovementRequest,
    responses(
        (status = 201, description = "Movement recorded and stock level adjusted", body = MovementResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_movement(
    Extension(service): Extension<DynMovementCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateMovementRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_movement(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn movement_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/movements", get(get_movements))
        .route("/api/movements", post(create_movement))
        .layer(Extension(app_state.di_container.movement_query.clone()))
        .layer(Extension(app_state.di_container.movement_command.clone()))
}
