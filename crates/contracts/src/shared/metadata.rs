//! Key/value metadata attached to a page type (public and private)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataItem {
    pub key: String,
    pub value: String,
}

impl MetadataItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Тело мутации обновления метаданных
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataInput {
    /// Items to upsert
    pub input: Vec<MetadataItem>,
    pub keys_to_delete: Vec<String>,
}

impl MetadataInput {
    /// Builds the mutation input that turns `initial` into `current`.
    ///
    /// Returns `None` when both lists describe the same key/value set, so an
    /// untouched metadata card never triggers a request.
    pub fn diff(initial: &[MetadataItem], current: &[MetadataItem]) -> Option<Self> {
        if as_map(initial) == as_map(current) {
            return None;
        }

        let current_keys: Vec<&str> = current.iter().map(|i| i.key.as_str()).collect();
        let keys_to_delete = initial
            .iter()
            .filter(|i| !current_keys.contains(&i.key.as_str()))
            .map(|i| i.key.clone())
            .collect();

        Some(Self {
            input: current.to_vec(),
            keys_to_delete,
        })
    }
}

fn as_map(items: &[MetadataItem]) -> BTreeMap<&str, &str> {
    items
        .iter()
        .map(|i| (i.key.as_str(), i.value.as_str()))
        .collect()
}

/// Apply a metadata mutation to a stored list, keeping insertion order
pub fn apply_metadata(stored: &mut Vec<MetadataItem>, input: &MetadataInput) {
    stored.retain(|i| !input.keys_to_delete.contains(&i.key));
    for item in &input.input {
        match stored.iter_mut().find(|i| i.key == item.key) {
            Some(existing) => existing.value = item.value.clone(),
            None => stored.push(item.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_unchanged_is_none() {
        let items = vec![MetadataItem::new("a", "1"), MetadataItem::new("b", "2")];
        let reordered = vec![MetadataItem::new("b", "2"), MetadataItem::new("a", "1")];
        assert_eq!(MetadataInput::diff(&items, &reordered), None);
    }

    #[test]
    fn test_diff_collects_removed_keys() {
        let initial = vec![MetadataItem::new("a", "1"), MetadataItem::new("b", "2")];
        let current = vec![MetadataItem::new("b", "3"), MetadataItem::new("c", "4")];

        let diff = MetadataInput::diff(&initial, &current).unwrap();
        assert_eq!(diff.input, current);
        assert_eq!(diff.keys_to_delete, vec!["a".to_string()]);
    }

    #[test]
    fn test_apply_metadata() {
        let mut stored = vec![MetadataItem::new("a", "1"), MetadataItem::new("b", "2")];
        let input = MetadataInput {
            input: vec![MetadataItem::new("b", "20"), MetadataItem::new("c", "3")],
            keys_to_delete: vec!["a".into()],
        };
        apply_metadata(&mut stored, &input);
        assert_eq!(
            stored,
            vec![MetadataItem::new("b", "20"), MetadataItem::new("c", "3")]
        );
    }
}
