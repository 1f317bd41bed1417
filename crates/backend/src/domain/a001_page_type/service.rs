use super::{repository, validation};
use crate::domain::a002_attribute;
use crate::shared::pagination;
use contracts::domain::a001_page_type::{
    MetadataUpdateResult, PageAttributeAssignResult, PageAttributeUnassignResult, PageType,
    PageTypeDeleteResult, PageTypeListItem, PageTypeUpdateInput, PageTypeUpdateResult,
};
use contracts::domain::a002_attribute::{Attribute, AttributeInputType, AttributeType};
use contracts::shared::metadata::{apply_metadata, MetadataInput, MetadataItem};
use contracts::shared::pagination::{Connection, SearchVariables};
use uuid::Uuid;

/// Получение списка всех типов страниц
pub async fn list_all() -> anyhow::Result<Vec<PageTypeListItem>> {
    repository::list_all().await
}

/// Получение типа страницы по ID
pub async fn get_by_id(id: &str) -> anyhow::Result<Option<PageType>> {
    repository::get_by_id(id).await
}

/// Поиск атрибутов, которые ещё можно назначить типу страницы.
///
/// `Ok(None)` when the page type does not exist. A malformed cursor surfaces
/// as a [`pagination::PaginationError`] inside the `anyhow::Error`.
pub async fn available_attributes(
    id: &str,
    vars: &SearchVariables,
) -> anyhow::Result<Option<Connection<Attribute>>> {
    if !repository::exists(id).await? {
        return Ok(None);
    }
    let assigned = repository::assigned_attribute_ids(id).await?;
    let items = a002_attribute::service::list_assignable(&assigned, &vars.query).await?;
    let page = pagination::paginate(items, vars, a002_attribute::service::cursor_key)?;
    Ok(Some(page))
}

/// Обновление наименования
pub async fn update(id: &str, input: PageTypeUpdateInput) -> anyhow::Result<PageTypeUpdateResult> {
    if !repository::exists(id).await? {
        return Ok(PageTypeUpdateResult {
            errors: vec![validation::page_type_not_found(id)],
            page_type: None,
        });
    }

    if let Some(name) = input.name.as_deref() {
        let mut errors = validation::validate_name(name);
        if errors.is_empty() && repository::name_taken(name, id).await? {
            errors.push(validation::name_not_unique());
        }
        if !errors.is_empty() {
            return Ok(PageTypeUpdateResult {
                errors,
                page_type: repository::get_by_id(id).await?,
            });
        }
        repository::update_name(id, name.trim()).await?;
        tracing::info!("Page type {} renamed to '{}'", id, name.trim());
    }

    Ok(PageTypeUpdateResult {
        errors: Vec::new(),
        page_type: repository::get_by_id(id).await?,
    })
}

/// Назначение атрибутов
pub async fn assign_attributes(id: &str, ids: Vec<String>) -> anyhow::Result<PageAttributeAssignResult> {
    if !repository::exists(id).await? {
        return Ok(PageAttributeAssignResult {
            errors: vec![validation::page_type_not_found(id)],
            page_type: None,
        });
    }

    let assigned = repository::assigned_attribute_ids(id).await?;
    let found = a002_attribute::repository::get_many(&ids).await?;
    let errors = validation::validate_assign(&ids, &assigned, &found);
    if !errors.is_empty() {
        return Ok(PageAttributeAssignResult {
            errors,
            page_type: repository::get_by_id(id).await?,
        });
    }

    repository::link_attributes(id, &ids).await?;
    tracing::info!("Assigned {} attribute(s) to page type {}", ids.len(), id);

    Ok(PageAttributeAssignResult {
        errors: Vec::new(),
        page_type: repository::get_by_id(id).await?,
    })
}

/// Снятие атрибутов; не назначенные ID игнорируются
pub async fn unassign_attributes(
    id: &str,
    ids: Vec<String>,
) -> anyhow::Result<PageAttributeUnassignResult> {
    if !repository::exists(id).await? {
        return Ok(PageAttributeUnassignResult {
            errors: vec![validation::page_type_not_found(id)],
            page_type: None,
        });
    }

    let removed = repository::unlink_attributes(id, &ids).await?;
    tracing::info!("Unassigned {} attribute(s) from page type {}", removed, id);

    Ok(PageAttributeUnassignResult {
        errors: Vec::new(),
        page_type: repository::get_by_id(id).await?,
    })
}

/// Обновление публичных (`is_private == false`) или приватных метаданных
pub async fn update_metadata(
    id: &str,
    input: MetadataInput,
    is_private: bool,
) -> anyhow::Result<MetadataUpdateResult> {
    let Some(page_type) = repository::get_by_id(id).await? else {
        return Ok(MetadataUpdateResult {
            errors: vec![validation::page_type_not_found(id)],
        });
    };

    let errors = validation::validate_metadata(&input);
    if !errors.is_empty() {
        return Ok(MetadataUpdateResult { errors });
    }

    let mut stored = if is_private {
        page_type.private_metadata
    } else {
        page_type.metadata
    };
    apply_metadata(&mut stored, &input);
    repository::replace_metadata(id, is_private, &stored).await?;

    Ok(MetadataUpdateResult { errors: Vec::new() })
}

/// Мягкое удаление типа страницы
pub async fn delete(id: &str) -> anyhow::Result<PageTypeDeleteResult> {
    if repository::soft_delete(id).await? {
        tracing::info!("Page type {} deleted", id);
        Ok(PageTypeDeleteResult { errors: Vec::new() })
    } else {
        Ok(PageTypeDeleteResult {
            errors: vec![validation::page_type_not_found(id)],
        })
    }
}

/// Вставка тестовых данных, если база пуста
pub async fn insert_test_data() -> anyhow::Result<()> {
    if a002_attribute::repository::count().await? > 0 {
        return Ok(());
    }

    let attributes = [
        ("Автор", AttributeInputType::Dropdown, AttributeType::PageType),
        ("Обложка", AttributeInputType::File, AttributeType::PageType),
        ("Рубрика", AttributeInputType::Multiselect, AttributeType::PageType),
        ("Краткое описание", AttributeInputType::RichText, AttributeType::PageType),
        ("Связанные страницы", AttributeInputType::Reference, AttributeType::PageType),
        ("Теги", AttributeInputType::Multiselect, AttributeType::PageType),
        ("Цвет", AttributeInputType::Dropdown, AttributeType::ProductType),
        ("Размер", AttributeInputType::Dropdown, AttributeType::ProductType),
    ];
    let mut ids = Vec::new();
    for (name, input_type, attribute_type) in attributes {
        let attribute = Attribute {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            slug: validation::slugify(name),
            input_type,
            attribute_type,
        };
        a002_attribute::repository::insert(&attribute).await?;
        ids.push(attribute.id);
    }

    let blog_id = Uuid::new_v4().to_string();
    repository::insert(&blog_id, "Статья блога", "blog-post").await?;
    repository::link_attributes(&blog_id, &ids[0..3]).await?;
    repository::replace_metadata(&blog_id, false, &[MetadataItem::new("seo_priority", "0.8")])
        .await?;

    let faq_id = Uuid::new_v4().to_string();
    repository::insert(&faq_id, "FAQ", "faq").await?;
    repository::link_attributes(&faq_id, &ids[3..4]).await?;

    repository::insert(&Uuid::new_v4().to_string(), "Лендинг", "landing").await?;

    tracing::info!("Demo page types and attributes inserted");
    Ok(())
}
