use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_attribute::AttributeDetailsResponse;

use crate::domain::a002_attribute::service;

/// GET /api/attribute/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<AttributeDetailsResponse>, StatusCode> {
    match service::get_by_id(&id).await {
        Ok(attribute) => Ok(Json(AttributeDetailsResponse { attribute })),
        Err(e) => {
            tracing::error!("get attribute {}: {:#}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
