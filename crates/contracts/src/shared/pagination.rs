//! Cursor based pagination shared by search endpoints

use serde::{Deserialize, Serialize};

/// Размер первой страницы поиска по умолчанию
pub const DEFAULT_SEARCH_PAGE_SIZE: u32 = 20;
/// Максимальный размер страницы, который отдаёт сервер
pub const MAX_SEARCH_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<T> {
    pub cursor: String,
    pub node: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            page_info: PageInfo::default(),
        }
    }
}

impl<T: Clone> Connection<T> {
    pub fn nodes(&self) -> Vec<T> {
        self.edges.iter().map(|e| e.node.clone()).collect()
    }
}

/// Переменные поискового запроса (`query` + курсорная пагинация)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchVariables {
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_first")]
    pub first: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

fn default_first() -> u32 {
    DEFAULT_SEARCH_PAGE_SIZE
}

impl Default for SearchVariables {
    fn default() -> Self {
        Self {
            query: String::new(),
            first: DEFAULT_SEARCH_PAGE_SIZE,
            after: None,
        }
    }
}

impl SearchVariables {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Variables for the page following `page_info`, if there is one
    pub fn next_page(&self, page_info: &PageInfo) -> Option<Self> {
        if !page_info.has_next_page {
            return None;
        }
        page_info.end_cursor.as_ref().map(|cursor| Self {
            query: self.query.clone(),
            first: self.first,
            after: Some(cursor.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_requires_cursor_and_flag() {
        let vars = SearchVariables::with_query("col");
        let mut info = PageInfo {
            has_next_page: true,
            end_cursor: Some("abc".into()),
            ..PageInfo::default()
        };

        let next = vars.next_page(&info).unwrap();
        assert_eq!(next.query, "col");
        assert_eq!(next.after.as_deref(), Some("abc"));

        info.has_next_page = false;
        assert!(vars.next_page(&info).is_none());
    }

    #[test]
    fn test_search_variables_defaults_on_deserialize() {
        let vars: SearchVariables = serde_json::from_str("{}").unwrap();
        assert_eq!(vars, SearchVariables::default());
        assert_eq!(vars.first, DEFAULT_SEARCH_PAGE_SIZE);
    }
}
