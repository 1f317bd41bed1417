use contracts::domain::a001_page_type::{
    AttributeIdsInput, AvailableAttributesResponse, MetadataUpdateResult,
    PageAttributeAssignResult, PageAttributeUnassignResult, PageTypeDeleteResult,
    PageTypeDetailsResponse, PageTypeListItem, PageTypeUpdateInput, PageTypeUpdateResult,
};
use contracts::shared::metadata::MetadataInput;
use contracts::shared::pagination::SearchVariables;

use crate::shared::api_utils::{delete_json, get_json, post_json};

fn page_type_path(id: &str) -> String {
    format!("/api/page_type/{}", urlencoding::encode(id))
}

/// Fetch all page types
pub async fn fetch_page_types() -> Result<Vec<PageTypeListItem>, String> {
    get_json("/api/page_type").await
}

/// `Ok(None)` = такого типа страницы нет
pub async fn fetch_page_type(id: &str) -> Result<PageTypeDetailsResponse, String> {
    get_json(&page_type_path(id)).await
}

/// Search attributes that can still be assigned to the page type
pub async fn search_available_attributes(
    id: &str,
    variables: &SearchVariables,
) -> Result<AvailableAttributesResponse, String> {
    let query = serde_qs::to_string(variables)
        .map_err(|e| format!("Failed to encode search: {}", e))?;
    get_json(&format!("{}/available_attributes?{}", page_type_path(id), query)).await
}

pub async fn update_page_type(
    id: &str,
    input: &PageTypeUpdateInput,
) -> Result<PageTypeUpdateResult, String> {
    post_json(&format!("{}/update", page_type_path(id)), input).await
}

pub async fn assign_attributes(
    id: &str,
    ids: Vec<String>,
) -> Result<PageAttributeAssignResult, String> {
    post_json(
        &format!("{}/attributes/assign", page_type_path(id)),
        &AttributeIdsInput { ids },
    )
    .await
}

pub async fn unassign_attributes(
    id: &str,
    ids: Vec<String>,
) -> Result<PageAttributeUnassignResult, String> {
    post_json(
        &format!("{}/attributes/unassign", page_type_path(id)),
        &AttributeIdsInput { ids },
    )
    .await
}

pub async fn update_metadata(id: &str, input: &MetadataInput) -> Result<MetadataUpdateResult, String> {
    post_json(&format!("{}/metadata", page_type_path(id)), input).await
}

pub async fn update_private_metadata(
    id: &str,
    input: &MetadataInput,
) -> Result<MetadataUpdateResult, String> {
    post_json(&format!("{}/private_metadata", page_type_path(id)), input).await
}

pub async fn delete_page_type(id: &str) -> Result<PageTypeDeleteResult, String> {
    delete_json(&page_type_path(id)).await
}
