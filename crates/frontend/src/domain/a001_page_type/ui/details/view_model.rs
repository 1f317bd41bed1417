use super::attribute_search::AvailableAttributeSearch;
use super::model::{
    completion_effects, completion_notification, plan_submit, DetailsDialog, DetailsErrors, ErrorSlot, FormRefill,
    MutationKind, MutationOutcome, PageTypeFormDto, PageTypeLoadState,
};
use crate::domain::a001_page_type::api;
use crate::domain::a001_page_type::urls::{
    page_type_list_url, page_type_url, PageTypeUrlDialog, PageTypeUrlQueryParams,
};
use crate::domain::a002_attribute::urls::attribute_url;
use crate::shared::bulk_actions::BulkActions;
use crate::shared::components::confirm_button::ConfirmButtonState;
use crate::shared::navigator::Navigator;
use crate::shared::notifier::Notifier;
use contracts::domain::a002_attribute::AttributeType;
use contracts::shared::errors::FieldError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Сколько кнопка показывает "Сохранено", мс
const STATUS_RESET_MS: u32 = 2000;

/// ViewModel экрана типа страницы
#[derive(Clone, Copy)]
pub struct PageTypeDetailsVm {
    id: StoredValue<String>,
    pub load_state: RwSignal<PageTypeLoadState>,
    pub form: RwSignal<PageTypeFormDto>,
    pub errors: RwSignal<DetailsErrors>,
    pub update_state: RwSignal<ConfirmButtonState>,
    pub assign_state: RwSignal<ConfirmButtonState>,
    pub unassign_state: RwSignal<ConfirmButtonState>,
    pub delete_state: RwSignal<ConfirmButtonState>,
    /// Ошибки удаления показываются в диалоге, отдельного слота у них нет
    pub delete_errors: RwSignal<Vec<String>>,
    pub bulk: BulkActions,
    pub search: AvailableAttributeSearch,
    navigator: Navigator,
    notifier: Notifier,
}

impl PageTypeDetailsVm {
    pub fn new(id: String, navigator: Navigator, notifier: Notifier) -> Self {
        let vm = Self {
            id: StoredValue::new(id.clone()),
            load_state: RwSignal::new(PageTypeLoadState::Loading),
            form: RwSignal::new(PageTypeFormDto::default()),
            errors: RwSignal::new(DetailsErrors::default()),
            update_state: RwSignal::new(ConfirmButtonState::Default),
            assign_state: RwSignal::new(ConfirmButtonState::Default),
            unassign_state: RwSignal::new(ConfirmButtonState::Default),
            delete_state: RwSignal::new(ConfirmButtonState::Default),
            delete_errors: RwSignal::new(Vec::new()),
            bulk: BulkActions::new(),
            search: AvailableAttributeSearch::new(id),
            navigator,
            notifier,
        };
        vm.load(FormRefill::Full);
        vm
    }

    pub fn id(&self) -> String {
        self.id.get_value()
    }

    /// Загрузить тип страницы и перезаполнить форму по `refill`
    pub fn load(&self, refill: FormRefill) {
        let id = self.id();
        let load_state = self.load_state;
        let form = self.form;

        spawn_local(async move {
            let next = match api::fetch_page_type(&id).await {
                Ok(response) => match response.page_type {
                    Some(page_type) => {
                        let current = form.get_untracked();
                        form.set(refill.apply(&page_type, &current));
                        PageTypeLoadState::Loaded(page_type)
                    }
                    None => {
                        log::warn!("Page type {} not found", id);
                        PageTypeLoadState::NotFound
                    }
                },
                Err(e) => {
                    log::error!("Failed to load page type {}: {}", id, e);
                    PageTypeLoadState::Failed(e)
                }
            };
            load_state.set(next);
        });
    }

    pub fn page_name(&self) -> Option<String> {
        self.load_state.with(|s| s.page_type().map(|pt| pt.name.clone()))
    }

    // ------------------------------------------------------------------
    // URL state
    // ------------------------------------------------------------------

    pub fn params(&self) -> PageTypeUrlQueryParams {
        PageTypeUrlQueryParams::parse(&self.navigator.search())
    }

    pub fn dialog(&self) -> DetailsDialog {
        DetailsDialog::from_params(&self.params())
    }

    pub fn open_dialog(&self, params: PageTypeUrlQueryParams) {
        self.assign_state.set(ConfirmButtonState::Default);
        self.unassign_state.set(ConfirmButtonState::Default);
        self.delete_state.set(ConfirmButtonState::Default);
        self.navigator.navigate(&page_type_url(&self.id(), Some(&params)), false);
    }

    pub fn close_modal(&self) {
        self.navigator.navigate(&page_type_url(&self.id(), None), true);
    }

    pub fn open_assign(&self) {
        self.open_dialog(PageTypeUrlQueryParams::assign_attribute(AttributeType::PageType));
    }

    pub fn open_unassign(&self, attribute_id: String) {
        self.open_dialog(
            PageTypeUrlQueryParams::open(PageTypeUrlDialog::UnassignAttribute).with_id(attribute_id),
        );
    }

    pub fn open_bulk_unassign(&self) {
        self.open_dialog(
            PageTypeUrlQueryParams::open(PageTypeUrlDialog::UnassignAttributes)
                .with_ids(self.bulk.list_elements()),
        );
    }

    pub fn open_remove(&self) {
        self.open_dialog(PageTypeUrlQueryParams::open(PageTypeUrlDialog::Remove));
    }

    /// Выбор атрибута в диалоге назначения хранится в `ids`
    pub fn toggle_assign_id(&self, attribute_id: String) {
        let next = self.params().toggle_id(&attribute_id);
        self.navigator.navigate(&page_type_url(&self.id(), Some(&next)), true);
    }

    pub fn back(&self) {
        self.navigator.navigate(&page_type_list_url(), false);
    }

    pub fn open_attribute(&self, attribute_id: String) {
        self.navigator.navigate(&attribute_url(&attribute_id), false);
    }

    /// Порядок атрибутов не сохраняется: перетаскивание только логируется
    pub fn reorder_attribute(&self, attribute_id: String, new_index: usize) {
        log::debug!("Attribute {} dropped at {}, reordering is not supported", attribute_id, new_index);
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    pub fn submit(&self) {
        let Some(initial) = self.load_state.with_untracked(|s| s.page_type().cloned()) else {
            return;
        };
        let plan = plan_submit(&initial, &self.form.get_untracked());
        let id = self.id();
        let this = *self;

        self.update_state.set(ConfirmButtonState::Loading);
        spawn_local(async move {
            let result = api::update_page_type(&id, &plan.update).await.map(|r| r.errors);
            let outcome = MutationOutcome::from_result(result);
            if !outcome.is_success() {
                this.finish(MutationKind::Update, this.update_state, outcome, FormRefill::Full);
                return;
            }

            // Метаданные сохраняются только после успешного обновления
            let mut metadata_errors: Vec<FieldError> = Vec::new();
            if let Some(input) = &plan.metadata {
                let result = api::update_metadata(&id, input).await.map(|r| r.errors);
                metadata_errors.extend(MutationOutcome::from_result(result).errors());
            }
            if let Some(input) = &plan.private_metadata {
                let result = api::update_private_metadata(&id, input).await.map(|r| r.errors);
                metadata_errors.extend(MutationOutcome::from_result(result).errors());
            }

            let refill = FormRefill::after_submit(&metadata_errors);
            this.finish(MutationKind::Update, this.update_state, outcome, refill);
            if !metadata_errors.is_empty() {
                log::warn!("Metadata update for {} returned {} error(s)", id, metadata_errors.len());
                this.errors.update(|e| e.append(ErrorSlot::Form, metadata_errors));
                this.update_state.set(ConfirmButtonState::Error);
            }
        });
    }

    pub fn assign(&self, attribute_ids: Vec<String>) {
        if !self.load_state.with_untracked(|s| s.can_mutate()) {
            return;
        }
        let id = self.id();
        let this = *self;
        self.assign_state.set(ConfirmButtonState::Loading);
        spawn_local(async move {
            let result = api::assign_attributes(&id, attribute_ids).await.map(|r| r.errors);
            this.finish(
                MutationKind::Assign,
                this.assign_state,
                MutationOutcome::from_result(result),
                FormRefill::Full,
            );
        });
    }

    pub fn unassign(&self, attribute_ids: Vec<String>) {
        if !self.load_state.with_untracked(|s| s.can_mutate()) {
            return;
        }
        let id = self.id();
        let this = *self;
        self.unassign_state.set(ConfirmButtonState::Loading);
        spawn_local(async move {
            let result = api::unassign_attributes(&id, attribute_ids).await.map(|r| r.errors);
            this.finish(
                MutationKind::Unassign,
                this.unassign_state,
                MutationOutcome::from_result(result),
                FormRefill::Full,
            );
        });
    }

    pub fn delete(&self) {
        if !self.load_state.with_untracked(|s| s.can_mutate()) {
            return;
        }
        let id = self.id();
        let this = *self;
        self.delete_state.set(ConfirmButtonState::Loading);
        spawn_local(async move {
            let result = api::delete_page_type(&id).await.map(|r| r.errors);
            this.finish(
                MutationKind::Delete,
                this.delete_state,
                MutationOutcome::from_result(result),
                FormRefill::Full,
            );
        });
    }

    fn finish(
        &self,
        kind: MutationKind,
        status: RwSignal<ConfirmButtonState>,
        outcome: MutationOutcome,
        refill: FormRefill,
    ) {
        status.set(outcome.button_state());
        match kind.error_slot() {
            Some(slot) => self.errors.update(|e| e.record(slot, outcome.errors())),
            None => self
                .delete_errors
                .set(outcome.errors().iter().map(|e| e.text()).collect()),
        }
        if let MutationOutcome::Failed(e) = &outcome {
            log::error!("{:?} mutation failed for page type {}: {}", kind, self.id(), e);
        }
        if let Some(notification) = completion_notification(kind, &outcome) {
            self.notifier.notify(notification);
        }

        let effects = completion_effects(kind, &outcome);
        if effects.reset_selection {
            self.bulk.reset();
        }
        if effects.close_dialog {
            self.close_modal();
        }
        if effects.go_to_list {
            self.back();
        }
        if effects.reload {
            self.load(refill);
        }
        if outcome.is_success() {
            spawn_local(async move {
                TimeoutFuture::new(STATUS_RESET_MS).await;
                // страница могла быть уже закрыта
                if status.try_get_untracked() == Some(ConfirmButtonState::Success) {
                    status.try_set(ConfirmButtonState::Default);
                }
            });
        }
    }
}
