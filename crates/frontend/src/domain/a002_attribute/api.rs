use contracts::domain::a002_attribute::AttributeDetailsResponse;

use crate::shared::api_utils::get_json;

/// `attribute: None` = атрибут не найден
pub async fn fetch_attribute(id: &str) -> Result<AttributeDetailsResponse, String> {
    get_json(&format!("/api/attribute/{}", urlencoding::encode(id))).await
}
