//! Server side checks for page type mutations.
//!
//! Every check returns the list of field errors the mutation answers with; an
//! empty list means the mutation may proceed.

use contracts::domain::a002_attribute::{Attribute, AttributeType};
use contracts::shared::errors::{ErrorCode, FieldError};
use contracts::shared::metadata::MetadataInput;
use std::collections::{HashMap, HashSet};

pub const NAME_MAX_LEN: usize = 250;

pub fn validate_name(name: &str) -> Vec<FieldError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return vec![FieldError::new("name", ErrorCode::Required)
            .with_message("Наименование обязательно для заполнения")];
    }
    if trimmed.chars().count() > NAME_MAX_LEN {
        return vec![FieldError::new("name", ErrorCode::Invalid)
            .with_message(format!("Наименование длиннее {} символов", NAME_MAX_LEN))];
    }
    Vec::new()
}

pub fn name_not_unique() -> FieldError {
    FieldError::new("name", ErrorCode::Unique).with_message("Тип страницы с таким наименованием уже существует")
}

pub fn page_type_not_found(id: &str) -> FieldError {
    FieldError::new("id", ErrorCode::NotFound).with_message(format!("Тип страницы {} не найден", id))
}

/// Проверка списка атрибутов для назначения
///
/// `found` holds the attributes that exist, keyed by id; `assigned` the ids
/// already linked to the page type.
pub fn validate_assign(
    ids: &[String],
    assigned: &[String],
    found: &HashMap<String, Attribute>,
) -> Vec<FieldError> {
    const FIELD: &str = "attribute_ids";

    if ids.is_empty() {
        return vec![FieldError::new(FIELD, ErrorCode::Required)
            .with_message("Не выбрано ни одного атрибута")];
    }

    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            errors.push(
                FieldError::new(FIELD, ErrorCode::DuplicatedInputItem)
                    .with_message(format!("Атрибут {} указан несколько раз", id)),
            );
            continue;
        }
        match found.get(id) {
            None => errors.push(
                FieldError::new(FIELD, ErrorCode::NotFound)
                    .with_message(format!("Атрибут {} не найден", id)),
            ),
            Some(attr) if attr.attribute_type != AttributeType::PageType => errors.push(
                FieldError::new(FIELD, ErrorCode::Invalid)
                    .with_message(format!("Атрибут {} предназначен для типов товаров", attr.name)),
            ),
            Some(attr) if assigned.contains(id) => errors.push(
                FieldError::new(FIELD, ErrorCode::AttributeAlreadyAssigned)
                    .with_message(format!("Атрибут {} уже назначен", attr.name)),
            ),
            Some(_) => {}
        }
    }
    errors
}

pub fn validate_metadata(input: &MetadataInput) -> Vec<FieldError> {
    if input.input.iter().any(|item| item.key.trim().is_empty()) {
        return vec![FieldError::new("input", ErrorCode::Required)
            .with_message("Ключ метаданных не может быть пустым")];
    }
    let mut seen = HashSet::new();
    if let Some(dup) = input.input.iter().find(|item| !seen.insert(item.key.as_str())) {
        return vec![FieldError::new("input", ErrorCode::DuplicatedInputItem)
            .with_message(format!("Ключ {} указан несколько раз", dup.key))];
    }
    Vec::new()
}

/// "Blog Post" -> "blog-post"
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_attribute::AttributeInputType;
    use contracts::shared::metadata::MetadataItem;

    fn attr(id: &str, attribute_type: AttributeType) -> (String, Attribute) {
        (
            id.to_string(),
            Attribute {
                id: id.into(),
                name: format!("Attr {}", id),
                slug: format!("attr-{}", id),
                input_type: AttributeInputType::Dropdown,
                attribute_type,
            },
        )
    }

    fn codes(errors: &[FieldError]) -> Vec<ErrorCode> {
        errors.iter().map(|e| e.code).collect()
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Blog post").is_empty());
        assert_eq!(codes(&validate_name("   ")), vec![ErrorCode::Required]);
        assert_eq!(
            codes(&validate_name(&"x".repeat(NAME_MAX_LEN + 1))),
            vec![ErrorCode::Invalid]
        );
    }

    #[test]
    fn test_validate_assign_reports_each_problem() {
        let found: HashMap<_, _> = [
            attr("1", AttributeType::PageType),
            attr("2", AttributeType::PageType),
            attr("3", AttributeType::ProductType),
        ]
        .into_iter()
        .collect();
        let ids: Vec<String> = ["1", "1", "2", "3", "9"].iter().map(|s| s.to_string()).collect();

        let errors = validate_assign(&ids, &["2".to_string()], &found);
        assert_eq!(
            codes(&errors),
            vec![
                ErrorCode::DuplicatedInputItem,
                ErrorCode::AttributeAlreadyAssigned,
                ErrorCode::Invalid,
                ErrorCode::NotFound,
            ]
        );
        assert!(errors.iter().all(|e| e.field.as_deref() == Some("attribute_ids")));
    }

    #[test]
    fn test_validate_assign_ok_and_empty() {
        let found: HashMap<_, _> = [attr("1", AttributeType::PageType)].into_iter().collect();
        assert!(validate_assign(&["1".to_string()], &[], &found).is_empty());
        assert_eq!(codes(&validate_assign(&[], &[], &found)), vec![ErrorCode::Required]);
    }

    #[test]
    fn test_validate_metadata() {
        let ok = MetadataInput {
            input: vec![MetadataItem::new("seo", "1")],
            keys_to_delete: vec![],
        };
        assert!(validate_metadata(&ok).is_empty());

        let blank = MetadataInput {
            input: vec![MetadataItem::new(" ", "1")],
            keys_to_delete: vec![],
        };
        assert_eq!(codes(&validate_metadata(&blank)), vec![ErrorCode::Required]);

        let dup = MetadataInput {
            input: vec![MetadataItem::new("a", "1"), MetadataItem::new("a", "2")],
            keys_to_delete: vec![],
        };
        assert_eq!(codes(&validate_metadata(&dup)), vec![ErrorCode::DuplicatedInputItem]);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Blog Post"), "blog-post");
        assert_eq!(slugify("  FAQ / Help!  "), "faq-help");
        assert_eq!(slugify("Статья"), "статья");
    }
}
