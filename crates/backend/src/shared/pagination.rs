//! Opaque cursor pagination over an already sorted list

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use contracts::shared::pagination::{Connection, Edge, PageInfo, SearchVariables, MAX_SEARCH_PAGE_SIZE};

const CURSOR_PREFIX: &str = "cursor:";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("invalid cursor: {0}")]
    InvalidCursor(String),
}

pub fn encode_cursor(key: &str) -> String {
    URL_SAFE_NO_PAD.encode(format!("{CURSOR_PREFIX}{key}"))
}

pub fn decode_cursor(cursor: &str) -> Result<String, PaginationError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(cursor)
        .map_err(|_| PaginationError::InvalidCursor(cursor.to_string()))?;
    let text =
        String::from_utf8(bytes).map_err(|_| PaginationError::InvalidCursor(cursor.to_string()))?;
    text.strip_prefix(CURSOR_PREFIX)
        .map(str::to_string)
        .ok_or_else(|| PaginationError::InvalidCursor(cursor.to_string()))
}

/// Slice `items` into a page.
///
/// `items` must be sorted ascending by `key_of`. The page starts at the first
/// item whose key is greater than the `after` cursor, so a cursor stays valid
/// even if the item it points to has left the list in the meantime.
pub fn paginate<T>(
    items: Vec<T>,
    vars: &SearchVariables,
    key_of: impl Fn(&T) -> String,
) -> Result<Connection<T>, PaginationError> {
    let first = vars.first.clamp(1, MAX_SEARCH_PAGE_SIZE) as usize;

    let start = match &vars.after {
        Some(cursor) => {
            let after_key = decode_cursor(cursor)?;
            items
                .iter()
                .position(|item| key_of(item) > after_key)
                .unwrap_or(items.len())
        }
        None => 0,
    };

    let total = items.len();
    let edges: Vec<Edge<T>> = items
        .into_iter()
        .skip(start)
        .take(first)
        .map(|node| Edge {
            cursor: encode_cursor(&key_of(&node)),
            node,
        })
        .collect();

    let page_info = PageInfo {
        has_next_page: start + edges.len() < total,
        has_previous_page: start > 0,
        start_cursor: edges.first().map(|e| e.cursor.clone()),
        end_cursor: edges.last().map(|e| e.cursor.clone()),
    };

    Ok(Connection { edges, page_info })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(first: u32, after: Option<String>) -> SearchVariables {
        SearchVariables {
            query: String::new(),
            first,
            after,
        }
    }

    fn letters() -> Vec<String> {
        ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_page() {
        let page = paginate(letters(), &vars(2, None), |s| s.clone()).unwrap();
        assert_eq!(page.nodes(), vec!["a", "b"]);
        assert!(page.page_info.has_next_page);
        assert!(!page.page_info.has_previous_page);
        assert_eq!(page.page_info.end_cursor, Some(encode_cursor("b")));
    }

    #[test]
    fn test_follow_end_cursor_to_last_page() {
        let first = paginate(letters(), &vars(3, None), |s| s.clone()).unwrap();
        let second = paginate(letters(), &vars(3, first.page_info.end_cursor.clone()), |s| {
            s.clone()
        })
        .unwrap();
        assert_eq!(second.nodes(), vec!["d", "e"]);
        assert!(!second.page_info.has_next_page);
        assert!(second.page_info.has_previous_page);
    }

    #[test]
    fn test_cursor_survives_removed_item() {
        let cursor = encode_cursor("b");
        let remaining: Vec<String> = ["a", "c", "d"].iter().map(|s| s.to_string()).collect();
        let page = paginate(remaining, &vars(10, Some(cursor)), |s| s.clone()).unwrap();
        assert_eq!(page.nodes(), vec!["c", "d"]);
    }

    #[test]
    fn test_invalid_cursor() {
        let err = paginate(letters(), &vars(2, Some("%%%".into())), |s| s.clone()).unwrap_err();
        assert_eq!(err, PaginationError::InvalidCursor("%%%".into()));

        let not_ours = URL_SAFE_NO_PAD.encode("offset:3");
        assert!(decode_cursor(&not_ours).is_err());
    }

    #[test]
    fn test_first_is_clamped() {
        let page = paginate(letters(), &vars(0, None), |s| s.clone()).unwrap();
        assert_eq!(page.edges.len(), 1);
    }
}
