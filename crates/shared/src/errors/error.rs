use serde::Serialize;
use utoipa::ToSchema;

/// Body for errors surfaced from the service layer.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}
