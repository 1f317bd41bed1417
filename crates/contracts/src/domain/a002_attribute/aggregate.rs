use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// К какому типу сущностей может быть привязан атрибут
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeType {
    #[default]
    PageType,
    ProductType,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::PageType => "PAGE_TYPE",
            AttributeType::ProductType => "PRODUCT_TYPE",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "PAGE_TYPE" => Some(AttributeType::PageType),
            "PRODUCT_TYPE" => Some(AttributeType::ProductType),
            _ => None,
        }
    }
}

/// Способ ввода значения атрибута
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeInputType {
    #[default]
    Dropdown,
    Multiselect,
    RichText,
    File,
    Reference,
}

impl AttributeInputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeInputType::Dropdown => "DROPDOWN",
            AttributeInputType::Multiselect => "MULTISELECT",
            AttributeInputType::RichText => "RICH_TEXT",
            AttributeInputType::File => "FILE",
            AttributeInputType::Reference => "REFERENCE",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "DROPDOWN" => Some(AttributeInputType::Dropdown),
            "MULTISELECT" => Some(AttributeInputType::Multiselect),
            "RICH_TEXT" => Some(AttributeInputType::RichText),
            "FILE" => Some(AttributeInputType::File),
            "REFERENCE" => Some(AttributeInputType::Reference),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttributeInputType::Dropdown => "Выпадающий список",
            AttributeInputType::Multiselect => "Множественный выбор",
            AttributeInputType::RichText => "Форматированный текст",
            AttributeInputType::File => "Файл",
            AttributeInputType::Reference => "Ссылка",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Атрибут: именованное свойство, назначаемое типу страницы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub input_type: AttributeInputType,
    #[serde(default)]
    pub attribute_type: AttributeType,
}

/// Ответ `GET /api/attribute/:id`; `None` если атрибут не найден
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeDetailsResponse {
    pub attribute: Option<Attribute>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_type_str_roundtrip() {
        for t in [AttributeType::PageType, AttributeType::ProductType] {
            assert_eq!(AttributeType::from_code(t.as_str()), Some(t));
        }
        assert_eq!(AttributeType::from_code("page_type"), None);
    }

    #[test]
    fn test_attribute_defaults_when_fields_missing() {
        let attr: Attribute =
            serde_json::from_str(r#"{"id":"1","name":"Color","slug":"color"}"#).unwrap();
        assert_eq!(attr.input_type, AttributeInputType::Dropdown);
        assert_eq!(attr.attribute_type, AttributeType::PageType);
    }
}
