use super::repository;
use contracts::domain::a002_attribute::{Attribute, AttributeType};

/// Получение атрибута по ID
pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Attribute>> {
    repository::get_by_id(id).await
}

/// Page-type attributes not in `assigned`, filtered by `query`, in cursor order
pub async fn list_assignable(assigned: &[String], query: &str) -> anyhow::Result<Vec<Attribute>> {
    let all = repository::list_by_type(AttributeType::PageType).await?;
    Ok(filter_assignable(all, assigned, query))
}

/// Ключ сортировки и курсора: имя без учёта регистра, затем ID
pub fn cursor_key(attribute: &Attribute) -> String {
    format!("{}\u{0}{}", attribute.name.to_lowercase(), attribute.id)
}

pub fn filter_assignable(all: Vec<Attribute>, assigned: &[String], query: &str) -> Vec<Attribute> {
    let query = query.trim().to_lowercase();
    let mut items: Vec<Attribute> = all
        .into_iter()
        .filter(|a| !assigned.contains(&a.id))
        .filter(|a| {
            query.is_empty()
                || a.name.to_lowercase().contains(&query)
                || a.slug.to_lowercase().contains(&query)
        })
        .collect();
    items.sort_by_key(cursor_key);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_attribute::AttributeInputType;

    fn attr(id: &str, name: &str) -> Attribute {
        Attribute {
            id: id.into(),
            name: name.into(),
            slug: name.to_lowercase().replace(' ', "-"),
            input_type: AttributeInputType::Dropdown,
            attribute_type: AttributeType::PageType,
        }
    }

    #[test]
    fn test_filter_excludes_assigned_and_sorts_by_name() {
        let all = vec![attr("1", "Size"), attr("2", "author"), attr("3", "Color")];
        let result = filter_assignable(all, &["1".to_string()], "");
        let names: Vec<_> = result.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["author", "Color"]);
    }

    #[test]
    fn test_filter_matches_name_or_slug_case_insensitive() {
        let mut hero = attr("1", "Hero image");
        hero.slug = "banner".into();
        let all = vec![hero, attr("2", "Author"), attr("3", "Cover")];

        let by_name = filter_assignable(all.clone(), &[], "HERO");
        assert_eq!(by_name.len(), 1);

        let by_slug = filter_assignable(all, &[], "bann");
        assert_eq!(by_slug[0].id, "1");
    }

    #[test]
    fn test_cursor_key_orders_same_names_by_id() {
        let mut items = vec![attr("b", "Tag"), attr("a", "tag")];
        items.sort_by_key(cursor_key);
        assert_eq!(items[0].id, "a");
    }
}
