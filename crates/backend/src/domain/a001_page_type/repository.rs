use chrono::Utc;
use contracts::domain::a001_page_type::{PageType, PageTypeListItem};
use contracts::shared::metadata::MetadataItem;
use std::collections::HashMap;

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::domain::a002_attribute;
use crate::shared::data::db::get_connection;

// ============================================================================
// Entities
// ============================================================================

pub mod page_type_entity {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "a001_page_type")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub name: String,
        pub slug: String,
        pub is_deleted: bool,
        pub created_at: Option<chrono::DateTime<chrono::Utc>>,
        pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
        pub version: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Назначение атрибута типу страницы (с порядком сортировки)
pub mod attribute_link_entity {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "a001_page_type_attribute")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub page_type_id: String,
        #[sea_orm(primary_key, auto_increment = false)]
        pub attribute_id: String,
        pub sort_order: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod metadata_entity {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "a001_page_type_metadata")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub page_type_id: String,
        #[sea_orm(primary_key, auto_increment = false)]
        pub meta_key: String,
        #[sea_orm(primary_key, auto_increment = false)]
        pub is_private: bool,
        pub meta_value: String,
        pub sort_order: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

use attribute_link_entity as link;
use metadata_entity as meta;
use page_type_entity as pt;

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

// ============================================================================
// Page type
// ============================================================================

pub async fn list_all() -> anyhow::Result<Vec<PageTypeListItem>> {
    let rows = pt::Entity::find()
        .filter(pt::Column::IsDeleted.eq(false))
        .order_by_asc(pt::Column::Name)
        .all(conn())
        .await?;

    let mut counts: HashMap<String, usize> = HashMap::new();
    for l in link::Entity::find().all(conn()).await? {
        *counts.entry(l.page_type_id).or_default() += 1;
    }

    Ok(rows
        .into_iter()
        .map(|m| PageTypeListItem {
            attribute_count: counts.get(&m.id).copied().unwrap_or(0),
            id: m.id,
            name: m.name,
            slug: m.slug,
        })
        .collect())
}

pub async fn exists(id: &str) -> anyhow::Result<bool> {
    let row = pt::Entity::find_by_id(id.to_string())
        .filter(pt::Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(row.is_some())
}

/// Собрать тип страницы вместе с атрибутами и метаданными
pub async fn get_by_id(id: &str) -> anyhow::Result<Option<PageType>> {
    let Some(row) = pt::Entity::find_by_id(id.to_string())
        .filter(pt::Column::IsDeleted.eq(false))
        .one(conn())
        .await?
    else {
        return Ok(None);
    };

    let attribute_ids = assigned_attribute_ids(id).await?;
    let mut by_id = a002_attribute::repository::get_many(&attribute_ids).await?;
    let attributes = attribute_ids
        .iter()
        .filter_map(|attr_id| by_id.remove(attr_id))
        .collect();

    let meta_rows = meta::Entity::find()
        .filter(meta::Column::PageTypeId.eq(id))
        .order_by_asc(meta::Column::SortOrder)
        .all(conn())
        .await?;
    let (private_rows, public_rows): (Vec<_>, Vec<_>) =
        meta_rows.into_iter().partition(|m| m.is_private);

    Ok(Some(PageType {
        id: row.id,
        name: row.name,
        slug: row.slug,
        attributes,
        metadata: public_rows.into_iter().map(to_item).collect(),
        private_metadata: private_rows.into_iter().map(to_item).collect(),
    }))
}

fn to_item(m: meta::Model) -> MetadataItem {
    MetadataItem {
        key: m.meta_key,
        value: m.meta_value,
    }
}

/// Is `name` used by another live page type
pub async fn name_taken(name: &str, except_id: &str) -> anyhow::Result<bool> {
    let rows = pt::Entity::find()
        .filter(pt::Column::IsDeleted.eq(false))
        .filter(pt::Column::Id.ne(except_id))
        .all(conn())
        .await?;
    let needle = name.trim().to_lowercase();
    Ok(rows.iter().any(|m| m.name.trim().to_lowercase() == needle))
}

pub async fn insert(id: &str, name: &str, slug: &str) -> anyhow::Result<()> {
    let now = Utc::now();
    let active = pt::ActiveModel {
        id: Set(id.to_string()),
        name: Set(name.to_string()),
        slug: Set(slug.to_string()),
        is_deleted: Set(false),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
        version: Set(0),
    };
    active.insert(conn()).await?;
    Ok(())
}

pub async fn update_name(id: &str, name: &str) -> anyhow::Result<()> {
    pt::Entity::update_many()
        .col_expr(pt::Column::Name, Expr::value(name.to_string()))
        .col_expr(pt::Column::UpdatedAt, Expr::value(Utc::now()))
        .col_expr(pt::Column::Version, Expr::col(pt::Column::Version).add(1))
        .filter(pt::Column::Id.eq(id))
        .exec(conn())
        .await?;
    Ok(())
}

pub async fn soft_delete(id: &str) -> anyhow::Result<bool> {
    let result = pt::Entity::update_many()
        .col_expr(pt::Column::IsDeleted, Expr::value(true))
        .col_expr(pt::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(pt::Column::Id.eq(id))
        .filter(pt::Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

// ============================================================================
// Attribute links
// ============================================================================

/// IDs of assigned attributes in sort order
pub async fn assigned_attribute_ids(page_type_id: &str) -> anyhow::Result<Vec<String>> {
    let links = link::Entity::find()
        .filter(link::Column::PageTypeId.eq(page_type_id))
        .order_by_asc(link::Column::SortOrder)
        .all(conn())
        .await?;
    Ok(links.into_iter().map(|l| l.attribute_id).collect())
}

/// Append attributes after the ones already assigned
pub async fn link_attributes(page_type_id: &str, attribute_ids: &[String]) -> anyhow::Result<()> {
    if attribute_ids.is_empty() {
        return Ok(());
    }
    let max_order = link::Entity::find()
        .filter(link::Column::PageTypeId.eq(page_type_id))
        .all(conn())
        .await?
        .iter()
        .map(|l| l.sort_order)
        .max()
        .unwrap_or(-1);

    let models = attribute_ids
        .iter()
        .enumerate()
        .map(|(i, attr_id)| link::ActiveModel {
            page_type_id: Set(page_type_id.to_string()),
            attribute_id: Set(attr_id.clone()),
            sort_order: Set(max_order + 1 + i as i32),
        });
    link::Entity::insert_many(models)
        .exec_without_returning(conn())
        .await?;
    Ok(())
}

pub async fn unlink_attributes(page_type_id: &str, attribute_ids: &[String]) -> anyhow::Result<u64> {
    if attribute_ids.is_empty() {
        return Ok(0);
    }
    let result = link::Entity::delete_many()
        .filter(link::Column::PageTypeId.eq(page_type_id))
        .filter(link::Column::AttributeId.is_in(attribute_ids.iter().cloned()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected)
}

// ============================================================================
// Metadata
// ============================================================================

/// Replace the stored metadata list of one kind (public or private)
pub async fn replace_metadata(
    page_type_id: &str,
    is_private: bool,
    items: &[MetadataItem],
) -> anyhow::Result<()> {
    meta::Entity::delete_many()
        .filter(meta::Column::PageTypeId.eq(page_type_id))
        .filter(meta::Column::IsPrivate.eq(is_private))
        .exec(conn())
        .await?;

    if items.is_empty() {
        return Ok(());
    }
    let models = items.iter().enumerate().map(|(i, item)| meta::ActiveModel {
        page_type_id: Set(page_type_id.to_string()),
        meta_key: Set(item.key.clone()),
        is_private: Set(is_private),
        meta_value: Set(item.value.clone()),
        sort_order: Set(i as i32),
    });
    meta::Entity::insert_many(models)
        .exec_without_returning(conn())
        .await?;
    Ok(())
}
