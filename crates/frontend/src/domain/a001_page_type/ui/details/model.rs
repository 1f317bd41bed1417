//! Состояние экрана типа страницы без привязки к DOM: что отправить при
//! сохранении, какой диалог открыт, куда складывать ошибки мутаций.

use crate::domain::a001_page_type::urls::{PageTypeUrlDialog, PageTypeUrlQueryParams};
use crate::shared::components::confirm_button::ConfirmButtonState;
use crate::shared::messages;
use crate::shared::notifier::Notification;
use contracts::domain::a001_page_type::{PageType, PageTypeUpdateInput};
use contracts::shared::errors::FieldError;
use contracts::shared::metadata::{MetadataInput, MetadataItem};

/// Результат загрузки типа страницы
#[derive(Clone, Debug, PartialEq)]
pub enum PageTypeLoadState {
    Loading,
    Loaded(PageType),
    /// Сервер ответил `page_type: null`
    NotFound,
    Failed(String),
}

impl PageTypeLoadState {
    pub fn page_type(&self) -> Option<&PageType> {
        match self {
            PageTypeLoadState::Loaded(pt) => Some(pt),
            _ => None,
        }
    }

    /// Мутации доступны только для загруженного типа страницы
    pub fn can_mutate(&self) -> bool {
        matches!(self, PageTypeLoadState::Loaded(_))
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageTypeFormDto {
    pub name: String,
    pub metadata: Vec<MetadataItem>,
    pub private_metadata: Vec<MetadataItem>,
}

impl From<&PageType> for PageTypeFormDto {
    fn from(pt: &PageType) -> Self {
        Self {
            name: pt.name.clone(),
            metadata: pt.metadata.clone(),
            private_metadata: pt.private_metadata.clone(),
        }
    }
}

/// Как перезаполнить форму после перезагрузки типа страницы
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormRefill {
    /// Форма целиком из ответа сервера
    Full,
    /// Имя с сервера, метаданные остаются как ввёл пользователь
    KeepMetadata,
}

impl FormRefill {
    /// Отклонённые метаданные не затираются: ошибка указывает на строку формы
    pub fn after_submit(metadata_errors: &[FieldError]) -> Self {
        if metadata_errors.is_empty() {
            FormRefill::Full
        } else {
            FormRefill::KeepMetadata
        }
    }

    pub fn apply(self, loaded: &PageType, current: &PageTypeFormDto) -> PageTypeFormDto {
        match self {
            FormRefill::Full => PageTypeFormDto::from(loaded),
            FormRefill::KeepMetadata => PageTypeFormDto {
                name: loaded.name.clone(),
                ..current.clone()
            },
        }
    }
}

/// Что уходит на сервер при нажатии "Сохранить"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitPlan {
    pub update: PageTypeUpdateInput,
    /// `None` — карточка не менялась, запрос не нужен
    pub metadata: Option<MetadataInput>,
    pub private_metadata: Option<MetadataInput>,
}

pub fn plan_submit(initial: &PageType, form: &PageTypeFormDto) -> SubmitPlan {
    SubmitPlan {
        update: PageTypeUpdateInput {
            name: Some(form.name.clone()),
        },
        metadata: MetadataInput::diff(&initial.metadata, &form.metadata),
        private_metadata: MetadataInput::diff(&initial.private_metadata, &form.private_metadata),
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorSlot {
    Form,
    AddAttribute,
    UnassignAttribute,
}

/// Ошибки последней попытки каждой операции
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailsErrors {
    pub form: Vec<FieldError>,
    pub add_attribute: Vec<FieldError>,
    pub unassign_attribute: Vec<FieldError>,
}

impl DetailsErrors {
    pub fn get(&self, slot: ErrorSlot) -> &[FieldError] {
        match slot {
            ErrorSlot::Form => &self.form,
            ErrorSlot::AddAttribute => &self.add_attribute,
            ErrorSlot::UnassignAttribute => &self.unassign_attribute,
        }
    }

    /// Replaces the slot; an empty list clears it
    pub fn record(&mut self, slot: ErrorSlot, errors: Vec<FieldError>) {
        match slot {
            ErrorSlot::Form => self.form = errors,
            ErrorSlot::AddAttribute => self.add_attribute = errors,
            ErrorSlot::UnassignAttribute => self.unassign_attribute = errors,
        }
    }

    /// Ошибки метаданных дописываются к ошибкам формы
    pub fn append(&mut self, slot: ErrorSlot, errors: Vec<FieldError>) {
        match slot {
            ErrorSlot::Form => self.form.extend(errors),
            ErrorSlot::AddAttribute => self.add_attribute.extend(errors),
            ErrorSlot::UnassignAttribute => self.unassign_attribute.extend(errors),
        }
    }

    pub fn texts(&self, slot: ErrorSlot) -> Vec<String> {
        self.get(slot).iter().map(|e| e.text()).collect()
    }
}

/// Outcome of a single mutation call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    Success,
    Rejected(Vec<FieldError>),
    Failed(String),
}

impl MutationOutcome {
    pub fn from_result(result: Result<Vec<FieldError>, String>) -> Self {
        match result {
            Ok(errors) if errors.is_empty() => MutationOutcome::Success,
            Ok(errors) => MutationOutcome::Rejected(errors),
            Err(e) => MutationOutcome::Failed(e),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MutationOutcome::Success)
    }

    /// Ошибки для показа; транспортная ошибка показывается как есть
    pub fn errors(&self) -> Vec<FieldError> {
        match self {
            MutationOutcome::Success => Vec::new(),
            MutationOutcome::Rejected(errors) => errors.clone(),
            MutationOutcome::Failed(message) => vec![FieldError::transport(message.clone())],
        }
    }

    pub fn button_state(&self) -> ConfirmButtonState {
        if self.is_success() {
            ConfirmButtonState::Success
        } else {
            ConfirmButtonState::Error
        }
    }
}

// ============================================================================
// Dialogs
// ============================================================================

/// Открытый диалог, выводится только из query параметров.
/// Выбор в диалоге назначения не входит сюда: он меняется без переоткрытия.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailsDialog {
    Closed,
    Assign,
    UnassignSingle(String),
    UnassignBulk(Vec<String>),
    Remove,
}

impl DetailsDialog {
    pub fn from_params(params: &PageTypeUrlQueryParams) -> Self {
        match (params.action, params.id.as_ref()) {
            (Some(PageTypeUrlDialog::AssignAttribute), _) => DetailsDialog::Assign,
            (Some(PageTypeUrlDialog::UnassignAttribute), Some(id)) => {
                DetailsDialog::UnassignSingle(id.clone())
            }
            (Some(PageTypeUrlDialog::UnassignAttributes), _) if !params.ids.is_empty() => {
                DetailsDialog::UnassignBulk(params.ids.clone())
            }
            (Some(PageTypeUrlDialog::Remove), _) => DetailsDialog::Remove,
            _ => DetailsDialog::Closed,
        }
    }
}

/// Выбранные в диалоге назначения атрибуты
pub fn assign_selection(params: &PageTypeUrlQueryParams) -> Vec<String> {
    match params.action {
        Some(PageTypeUrlDialog::AssignAttribute) => params.selected_ids().to_vec(),
        _ => Vec::new(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    Update,
    Assign,
    Unassign,
    Delete,
}

impl MutationKind {
    pub fn error_slot(&self) -> Option<ErrorSlot> {
        match self {
            MutationKind::Update => Some(ErrorSlot::Form),
            MutationKind::Assign => Some(ErrorSlot::AddAttribute),
            MutationKind::Unassign => Some(ErrorSlot::UnassignAttribute),
            MutationKind::Delete => None,
        }
    }
}

/// Что делает экран после успешной мутации
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompletionEffects {
    pub close_dialog: bool,
    pub reset_selection: bool,
    pub go_to_list: bool,
    pub reload: bool,
}

pub fn completion_effects(kind: MutationKind, outcome: &MutationOutcome) -> CompletionEffects {
    if !outcome.is_success() {
        return CompletionEffects::default();
    }
    let base = CompletionEffects::default();
    match kind {
        MutationKind::Update => CompletionEffects { reload: true, ..base },
        MutationKind::Assign => CompletionEffects {
            close_dialog: true,
            reload: true,
            ..base
        },
        MutationKind::Unassign => CompletionEffects {
            close_dialog: true,
            reset_selection: true,
            reload: true,
            ..base
        },
        MutationKind::Delete => CompletionEffects {
            go_to_list: true,
            ..base
        },
    }
}

/// Уведомление по итогу мутации: успех, либо сбой транспорта.
/// Отклонённые сервером данные показываются у полей, без уведомления.
pub fn completion_notification(kind: MutationKind, outcome: &MutationOutcome) -> Option<Notification> {
    match outcome {
        MutationOutcome::Success => Some(Notification::success(match kind {
            MutationKind::Update => messages::SAVED_CHANGES,
            MutationKind::Assign => messages::ATTRIBUTES_ASSIGNED,
            MutationKind::Unassign => messages::ATTRIBUTES_UNASSIGNED,
            MutationKind::Delete => messages::PAGE_TYPE_REMOVED,
        })),
        MutationOutcome::Failed(_) => Some(Notification::error(messages::SOMETHING_WENT_WRONG)),
        MutationOutcome::Rejected(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifier::NotificationStatus;
    use contracts::shared::errors::ErrorCode;

    fn page_type() -> PageType {
        PageType {
            id: "1".into(),
            name: "Статья".into(),
            slug: "statya".into(),
            attributes: Vec::new(),
            metadata: vec![MetadataItem::new("seo", "on")],
            private_metadata: vec![MetadataItem::new("owner", "content")],
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_name_only_submit() {
        let pt = page_type();
        let mut form = PageTypeFormDto::from(&pt);
        form.name = "Новость".into();

        let plan = plan_submit(&pt, &form);
        assert_eq!(
            plan.update,
            PageTypeUpdateInput {
                name: Some("Новость".into())
            }
        );
        assert_eq!(plan.metadata, None);
        assert_eq!(plan.private_metadata, None);

        let json = serde_json::to_value(&plan.update).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Новость" }));
    }

    #[test]
    fn test_changed_metadata_is_planned() {
        let pt = page_type();
        let mut form = PageTypeFormDto::from(&pt);
        form.metadata = vec![MetadataItem::new("lang", "ru")];

        let plan = plan_submit(&pt, &form);
        let metadata = plan.metadata.unwrap();
        assert_eq!(metadata.input, vec![MetadataItem::new("lang", "ru")]);
        assert_eq!(metadata.keys_to_delete, ids(&["seo"]));
        assert_eq!(plan.private_metadata, None);
    }

    #[test]
    fn test_update_errors_are_kept_without_effects() {
        let rejected = vec![FieldError::new("name", ErrorCode::Unique)];
        let outcome = MutationOutcome::from_result(Ok(rejected.clone()));

        let effects = completion_effects(MutationKind::Update, &outcome);
        assert_eq!(effects, CompletionEffects::default());

        let mut errors = DetailsErrors::default();
        errors.record(ErrorSlot::Form, outcome.errors());
        assert_eq!(errors.form, rejected);
        assert_eq!(errors.texts(ErrorSlot::Form), vec!["Значение должно быть уникальным".to_string()]);
        assert_eq!(outcome.button_state(), ConfirmButtonState::Error);
    }

    #[test]
    fn test_success_clears_slot() {
        let mut errors = DetailsErrors::default();
        errors.record(ErrorSlot::AddAttribute, vec![FieldError::transport("boom")]);
        errors.record(ErrorSlot::AddAttribute, MutationOutcome::Success.errors());
        assert!(errors.add_attribute.is_empty());
    }

    #[test]
    fn test_transport_error_message_is_raw() {
        let outcome = MutationOutcome::from_result(Err("HTTP 500 Internal Server Error".into()));
        assert_eq!(
            outcome.errors()[0].text(),
            "HTTP 500 Internal Server Error"
        );
        assert_eq!(outcome.errors()[0].code, ErrorCode::GraphqlError);
    }

    #[test]
    fn test_dialog_from_params() {
        let assign = PageTypeUrlQueryParams::open(PageTypeUrlDialog::AssignAttribute)
            .with_ids(ids(&["7"]));
        assert_eq!(DetailsDialog::from_params(&assign), DetailsDialog::Assign);
        assert_eq!(assign_selection(&assign), ids(&["7"]));

        let single = PageTypeUrlQueryParams::open(PageTypeUrlDialog::UnassignAttribute).with_id("3");
        assert_eq!(DetailsDialog::from_params(&single), DetailsDialog::UnassignSingle("3".into()));

        let bulk = PageTypeUrlQueryParams::open(PageTypeUrlDialog::UnassignAttributes)
            .with_ids(ids(&["1", "2"]));
        assert_eq!(DetailsDialog::from_params(&bulk), DetailsDialog::UnassignBulk(ids(&["1", "2"])));

        let remove = PageTypeUrlQueryParams::open(PageTypeUrlDialog::Remove);
        assert_eq!(DetailsDialog::from_params(&remove), DetailsDialog::Remove);
    }

    #[test]
    fn test_shape_mismatch_is_closed() {
        let no_id = PageTypeUrlQueryParams::open(PageTypeUrlDialog::UnassignAttribute);
        assert_eq!(DetailsDialog::from_params(&no_id), DetailsDialog::Closed);

        let no_ids = PageTypeUrlQueryParams::open(PageTypeUrlDialog::UnassignAttributes);
        assert_eq!(DetailsDialog::from_params(&no_ids), DetailsDialog::Closed);

        assert_eq!(
            DetailsDialog::from_params(&PageTypeUrlQueryParams::default()),
            DetailsDialog::Closed
        );
    }

    #[test]
    fn test_unassign_success_resets_selection_and_closes() {
        let effects = completion_effects(MutationKind::Unassign, &MutationOutcome::Success);
        assert!(effects.close_dialog);
        assert!(effects.reset_selection);
        assert!(!effects.go_to_list);
    }

    #[test]
    fn test_delete_success_goes_to_list() {
        let effects = completion_effects(MutationKind::Delete, &MutationOutcome::Success);
        assert!(effects.go_to_list);
        assert!(!effects.reload);
    }

    #[test]
    fn test_rejected_metadata_survives_reload() {
        let pt = page_type();
        let mut form = PageTypeFormDto::from(&pt);
        form.name = "Новость".into();
        form.metadata.push(MetadataItem::new("", "x"));

        let errors = vec![FieldError::new("input", ErrorCode::Required)];
        let refill = FormRefill::after_submit(&errors);
        assert_eq!(refill, FormRefill::KeepMetadata);

        let mut saved = pt.clone();
        saved.name = "Новость".into();
        let next = refill.apply(&saved, &form);
        assert_eq!(next.name, "Новость");
        assert_eq!(next.metadata, form.metadata);
        assert_eq!(next.private_metadata, form.private_metadata);
    }

    #[test]
    fn test_clean_submit_refills_from_server() {
        let pt = page_type();
        let mut form = PageTypeFormDto::from(&pt);
        form.metadata.clear();

        let refill = FormRefill::after_submit(&[]);
        assert_eq!(refill, FormRefill::Full);
        assert_eq!(refill.apply(&pt, &form), PageTypeFormDto::from(&pt));
    }

    #[test]
    fn test_completion_notification() {
        let saved = completion_notification(MutationKind::Update, &MutationOutcome::Success).unwrap();
        assert_eq!(saved, Notification::success(messages::SAVED_CHANGES));

        let failed =
            completion_notification(MutationKind::Assign, &MutationOutcome::Failed("offline".into()))
                .unwrap();
        assert_eq!(failed.status, NotificationStatus::Error);

        let rejected = MutationOutcome::Rejected(vec![FieldError::new("name", ErrorCode::Unique)]);
        assert_eq!(completion_notification(MutationKind::Update, &rejected), None);
    }

    #[test]
    fn test_not_found_cannot_mutate() {
        assert!(!PageTypeLoadState::NotFound.can_mutate());
        assert!(!PageTypeLoadState::Loading.can_mutate());
        assert!(PageTypeLoadState::Loaded(page_type()).can_mutate());
    }
}
