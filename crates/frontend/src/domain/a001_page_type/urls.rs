//! URL для типов страниц.
//!
//! Открытый диалог и выбранные id живут только в query string:
//! `/page-types/1?action=unassign-attributes&ids[0]=3&ids[1]=5`.

use contracts::domain::a002_attribute::AttributeType;
use serde::{Deserialize, Serialize};

pub const PAGE_TYPE_SECTION: &str = "/page-types";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageTypeUrlDialog {
    AssignAttribute,
    UnassignAttribute,
    UnassignAttributes,
    Remove,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTypeUrlQueryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<PageTypeUrlDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub attribute_type: Option<AttributeType>,
}

impl PageTypeUrlQueryParams {
    /// Разбор query string (без `?`). Нераспознанный ввод даёт закрытое состояние.
    pub fn parse(search: &str) -> Self {
        let search = search.trim_start_matches('?');
        if search.is_empty() {
            return Self::default();
        }
        // non-strict: браузер отдаёт `ids%5B0%5D=..`
        match serde_qs::Config::new(5, false).deserialize_str::<Self>(search) {
            Ok(params) => params,
            Err(e) => {
                log::warn!("Ignoring malformed page type query '{}': {}", search, e);
                Self::default()
            }
        }
    }

    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }

    pub fn open(action: PageTypeUrlDialog) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }

    /// Диалог назначения атрибутов заданного типа
    pub fn assign_attribute(attribute_type: AttributeType) -> Self {
        Self::open(PageTypeUrlDialog::AssignAttribute).with_attribute_type(attribute_type)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_ids(mut self, ids: Vec<String>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_attribute_type(mut self, attribute_type: AttributeType) -> Self {
        self.attribute_type = Some(attribute_type);
        self
    }

    pub fn selected_ids(&self) -> &[String] {
        &self.ids
    }

    /// Отсутствующий id добавляется в конец, присутствующий удаляется
    pub fn toggle_id(&self, id: &str) -> Self {
        let mut next = self.clone();
        if next.ids.iter().any(|existing| existing == id) {
            next.ids.retain(|existing| existing != id);
        } else {
            next.ids.push(id.to_string());
        }
        next
    }
}

pub fn page_type_list_url() -> String {
    PAGE_TYPE_SECTION.to_string()
}

pub fn page_type_url(id: &str, params: Option<&PageTypeUrlQueryParams>) -> String {
    let base = format!("{}/{}", PAGE_TYPE_SECTION, urlencoding::encode(id));
    match params.map(|p| p.to_query_string()) {
        Some(query) if !query.is_empty() => format!("{}?{}", base, query),
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assign_with_preselected_id() {
        let params = PageTypeUrlQueryParams::parse("action=assign-attribute&ids[0]=7");
        assert_eq!(params.action, Some(PageTypeUrlDialog::AssignAttribute));
        assert_eq!(params.selected_ids(), ["7".to_string()].as_slice());
    }

    #[test]
    fn test_parse_encoded_brackets_and_type() {
        let params = PageTypeUrlQueryParams::parse(
            "?action=unassign-attributes&ids%5B0%5D=1&ids%5B1%5D=2&type=PAGE_TYPE",
        );
        assert_eq!(params.action, Some(PageTypeUrlDialog::UnassignAttributes));
        assert_eq!(params.ids, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(params.attribute_type, Some(AttributeType::PageType));
    }

    #[test]
    fn test_parse_garbage_is_closed() {
        assert_eq!(PageTypeUrlQueryParams::parse(""), PageTypeUrlQueryParams::default());
        assert_eq!(
            PageTypeUrlQueryParams::parse("action=explode"),
            PageTypeUrlQueryParams::default()
        );
    }

    #[test]
    fn test_toggle_id() {
        let params = PageTypeUrlQueryParams::open(PageTypeUrlDialog::AssignAttribute)
            .with_ids(vec!["7".to_string()]);

        let added = params.toggle_id("9");
        assert_eq!(added.ids, vec!["7".to_string(), "9".to_string()]);

        let removed = added.toggle_id("7");
        assert_eq!(removed.ids, vec!["9".to_string()]);
        assert_eq!(removed.action, Some(PageTypeUrlDialog::AssignAttribute));
    }

    #[test]
    fn test_query_string_round_trip() {
        let params = PageTypeUrlQueryParams::open(PageTypeUrlDialog::UnassignAttribute).with_id("42");
        let query = params.to_query_string();
        assert!(query.contains("action=unassign-attribute"));
        assert_eq!(PageTypeUrlQueryParams::parse(&query), params);
    }

    #[test]
    fn test_assign_url_carries_attribute_type() {
        let params = PageTypeUrlQueryParams::assign_attribute(AttributeType::PageType);
        let url = page_type_url("1", Some(&params));
        assert!(url.starts_with("/page-types/1?"));
        assert!(url.contains("action=assign-attribute"));
        assert!(url.contains("type=PAGE_TYPE"));

        // выбор атрибутов не теряет тип
        let toggled = params.toggle_id("7");
        assert_eq!(toggled.attribute_type, Some(AttributeType::PageType));
    }

    #[test]
    fn test_page_type_url() {
        assert_eq!(page_type_url("1", None), "/page-types/1");
        assert_eq!(
            page_type_url("1", Some(&PageTypeUrlQueryParams::default())),
            "/page-types/1"
        );
        assert_eq!(
            page_type_url("1", Some(&PageTypeUrlQueryParams::open(PageTypeUrlDialog::Remove))),
            "/page-types/1?action=remove"
        );
    }
}
