use serde::{Deserialize, Serialize};

use crate::domain::a002_attribute::Attribute;
use crate::shared::errors::FieldError;
use crate::shared::metadata::MetadataItem;
use crate::shared::pagination::Connection;

// ============================================================================
// Aggregate
// ============================================================================

/// Тип страницы: шаблон, определяющий набор атрибутов страницы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageType {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Назначенные атрибуты в порядке сортировки
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub metadata: Vec<MetadataItem>,
    #[serde(default)]
    pub private_metadata: Vec<MetadataItem>,
}

impl PageType {
    pub fn find_attribute(&self, attribute_id: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.id == attribute_id)
    }
}

/// Строка списка типов страниц
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTypeListItem {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub attribute_count: usize,
}

// ============================================================================
// Queries
// ============================================================================

/// Ответ `GET /api/page_type/:id`; `page_type == None` означает "не найден"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageTypeDetailsResponse {
    pub page_type: Option<PageType>,
}

/// Ответ поиска атрибутов, доступных для назначения
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailableAttributesResponse {
    pub available_attributes: Option<Connection<Attribute>>,
}

// ============================================================================
// Mutations
// ============================================================================

/// Входные данные обновления. Поля `None` не изменяются.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTypeUpdateInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeIdsInput {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageTypeUpdateResult {
    pub errors: Vec<FieldError>,
    pub page_type: Option<PageType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageAttributeAssignResult {
    pub errors: Vec<FieldError>,
    pub page_type: Option<PageType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageAttributeUnassignResult {
    pub errors: Vec<FieldError>,
    pub page_type: Option<PageType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataUpdateResult {
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageTypeDeleteResult {
    pub errors: Vec<FieldError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_input_omits_untouched_fields() {
        let json = serde_json::to_string(&PageTypeUpdateInput::default()).unwrap();
        assert_eq!(json, "{}");

        let input = PageTypeUpdateInput {
            name: Some("Blog post".into()),
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"name":"Blog post"}"#
        );
    }

    #[test]
    fn test_null_page_type_deserializes_to_none() {
        let resp: PageTypeDetailsResponse = serde_json::from_str(r#"{"page_type":null}"#).unwrap();
        assert!(resp.page_type.is_none());
    }
}
