use contracts::domain::a002_attribute::{Attribute, AttributeInputType, AttributeType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_attribute")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub slug: String,
    pub input_type: String,
    pub attribute_type: String,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Attribute {
    fn from(m: Model) -> Self {
        Attribute {
            input_type: AttributeInputType::from_code(&m.input_type).unwrap_or_default(),
            attribute_type: AttributeType::from_code(&m.attribute_type).unwrap_or_default(),
            id: m.id,
            name: m.name,
            slug: m.slug,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Attribute>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

/// Load attributes by id, keyed by id (missing ids are simply absent)
pub async fn get_many(ids: &[String]) -> anyhow::Result<HashMap<String, Attribute>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = Entity::find()
        .filter(Column::Id.is_in(ids.iter().cloned()))
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?;
    Ok(rows
        .into_iter()
        .map(|m| (m.id.clone(), Attribute::from(m)))
        .collect())
}

pub async fn list_by_type(attribute_type: AttributeType) -> anyhow::Result<Vec<Attribute>> {
    let rows = Entity::find()
        .filter(Column::AttributeType.eq(attribute_type.as_str()))
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::Name)
        .all(conn())
        .await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?)
}

pub async fn insert(attribute: &Attribute) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(attribute.id.clone()),
        name: Set(attribute.name.clone()),
        slug: Set(attribute.slug.clone()),
        input_type: Set(attribute.input_type.as_str().to_string()),
        attribute_type: Set(attribute.attribute_type.as_str().to_string()),
        is_deleted: Set(false),
    };
    active.insert(conn()).await?;
    Ok(())
}
