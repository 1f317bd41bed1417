use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_page_type::{
    AttributeIdsInput, AvailableAttributesResponse, MetadataUpdateResult,
    PageAttributeAssignResult, PageAttributeUnassignResult, PageTypeDeleteResult,
    PageTypeDetailsResponse, PageTypeListItem, PageTypeUpdateInput, PageTypeUpdateResult,
};
use contracts::shared::metadata::MetadataInput;
use contracts::shared::pagination::SearchVariables;

use crate::domain::a001_page_type::service;
use crate::shared::pagination::PaginationError;

fn internal_error(context: &str, e: anyhow::Error) -> StatusCode {
    tracing::error!("{}: {:#}", context, e);
    StatusCode::INTERNAL_SERVER_ERROR
}

/// GET /api/page_type
pub async fn list_all() -> Result<Json<Vec<PageTypeListItem>>, StatusCode> {
    service::list_all()
        .await
        .map(Json)
        .map_err(|e| internal_error("list page types", e))
}

/// GET /api/page_type/:id
///
/// An unknown id answers `{"page_type": null}`, not 404.
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<PageTypeDetailsResponse>, StatusCode> {
    service::get_by_id(&id)
        .await
        .map(|page_type| Json(PageTypeDetailsResponse { page_type }))
        .map_err(|e| internal_error("get page type", e))
}

/// GET /api/page_type/:id/available_attributes?query=&first=&after=
pub async fn available_attributes(
    Path(id): Path<String>,
    Query(vars): Query<SearchVariables>,
) -> Result<Json<AvailableAttributesResponse>, StatusCode> {
    match service::available_attributes(&id, &vars).await {
        Ok(available_attributes) => Ok(Json(AvailableAttributesResponse {
            available_attributes,
        })),
        Err(e) if e.downcast_ref::<PaginationError>().is_some() => {
            tracing::warn!("available attributes for {}: {}", id, e);
            Err(StatusCode::BAD_REQUEST)
        }
        Err(e) => Err(internal_error("search available attributes", e)),
    }
}

/// POST /api/page_type/:id/update
pub async fn update(
    Path(id): Path<String>,
    Json(input): Json<PageTypeUpdateInput>,
) -> Result<Json<PageTypeUpdateResult>, StatusCode> {
    service::update(&id, input)
        .await
        .map(Json)
        .map_err(|e| internal_error("update page type", e))
}

/// POST /api/page_type/:id/attributes/assign
pub async fn assign_attributes(
    Path(id): Path<String>,
    Json(input): Json<AttributeIdsInput>,
) -> Result<Json<PageAttributeAssignResult>, StatusCode> {
    service::assign_attributes(&id, input.ids)
        .await
        .map(Json)
        .map_err(|e| internal_error("assign attributes", e))
}

/// POST /api/page_type/:id/attributes/unassign
pub async fn unassign_attributes(
    Path(id): Path<String>,
    Json(input): Json<AttributeIdsInput>,
) -> Result<Json<PageAttributeUnassignResult>, StatusCode> {
    service::unassign_attributes(&id, input.ids)
        .await
        .map(Json)
        .map_err(|e| internal_error("unassign attributes", e))
}

/// POST /api/page_type/:id/metadata
pub async fn update_metadata(
    Path(id): Path<String>,
    Json(input): Json<MetadataInput>,
) -> Result<Json<MetadataUpdateResult>, StatusCode> {
    service::update_metadata(&id, input, false)
        .await
        .map(Json)
        .map_err(|e| internal_error("update metadata", e))
}

/// POST /api/page_type/:id/private_metadata
pub async fn update_private_metadata(
    Path(id): Path<String>,
    Json(input): Json<MetadataInput>,
) -> Result<Json<MetadataUpdateResult>, StatusCode> {
    service::update_metadata(&id, input, true)
        .await
        .map(Json)
        .map_err(|e| internal_error("update private metadata", e))
}

/// DELETE /api/page_type/:id
pub async fn delete(Path(id): Path<String>) -> Result<Json<PageTypeDeleteResult>, StatusCode> {
    service::delete(&id)
        .await
        .map(Json)
        .map_err(|e| internal_error("delete page type", e))
}
