//! Экран типа страницы

use super::attributes_card::AttributesCard;
use super::dialogs::{
    AssignAttributeDialog, AttributeUnassignDialog, BulkAttributeUnassignDialog,
    PageTypeRemoveDialog,
};
use super::form::GeneralInfoCard;
use super::metadata_card::MetadataCard;
use super::model::{assign_selection, DetailsDialog, PageTypeLoadState};
use super::view_model::PageTypeDetailsVm;
use crate::shared::components::confirm_button::ConfirmButton;
use crate::shared::components::not_found_page::NotFoundPage;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::messages;
use crate::shared::navigator::use_navigator;
use crate::shared::notifier::use_notifier;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Loading,
    Loaded,
    NotFound,
    Failed(String),
}

#[component]
pub fn PageTypeDetailsPage(id: String) -> impl IntoView {
    let vm = PageTypeDetailsVm::new(id, use_navigator(), use_notifier());

    let phase = Memo::new(move |_| {
        vm.load_state.with(|s| match s {
            PageTypeLoadState::Loading => Phase::Loading,
            PageTypeLoadState::Loaded(_) => Phase::Loaded,
            PageTypeLoadState::NotFound => Phase::NotFound,
            PageTypeLoadState::Failed(e) => Phase::Failed(e.clone()),
        })
    });

    // Заголовок окна = название типа страницы
    Effect::new(move |_| {
        if let Some(name) = vm.page_name() {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(&name);
            }
        }
    });

    let on_back = Callback::new(move |_| vm.back());

    view! {
        {move || match phase.get() {
            Phase::NotFound => view! { <NotFoundPage on_back=on_back /> }.into_any(),
            Phase::Failed(e) => view! {
                <div class="page page--detail">
                    <PageHeader title=messages::SOMETHING_WENT_WRONG.to_string() on_back=on_back>
                        <span></span>
                    </PageHeader>
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">{icon("alert")}</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                </div>
            }.into_any(),
            Phase::Loading => view! {
                <div class="page page--detail">
                    <PageHeader title=messages::PLACEHOLDER.to_string() on_back=on_back>
                        <span></span>
                    </PageHeader>
                    <div class="page__loading">{messages::LOADING}</div>
                </div>
            }.into_any(),
            Phase::Loaded => view! { <PageTypeDetailsView vm=vm /> }.into_any(),
        }}
    }
}

#[component]
fn PageTypeDetailsView(vm: PageTypeDetailsVm) -> impl IntoView {
    let title = Signal::derive(move || vm.page_name().unwrap_or_else(|| messages::PLACEHOLDER.to_string()));
    let dialog = Memo::new(move |_| vm.dialog());
    let assign_selected = Signal::derive(move || assign_selection(&vm.params()));

    view! {
        <div class="page page--detail">
            <PageHeader title=title on_back=Callback::new(move |_| vm.back())>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.open_remove()>
                    {icon("trash")}
                    " "
                    {messages::DELETE}
                </Button>
                <ConfirmButton
                    state=vm.update_state
                    label=messages::SAVE
                    on_click=Callback::new(move |_| vm.submit())
                />
            </PageHeader>

            <div class="page__content page-type-details">
                <div class="page-type-details__main">
                    <GeneralInfoCard vm=vm />
                    <AttributesCard vm=vm />
                </div>
                <div class="page-type-details__side">
                    <MetadataCard vm=vm is_private=false />
                    <MetadataCard vm=vm is_private=true />
                </div>
            </div>

            {move || match dialog.get() {
                DetailsDialog::Closed => ().into_any(),
                DetailsDialog::Assign => view! {
                    <AssignAttributeDialog vm=vm selected=assign_selected />
                }.into_any(),
                DetailsDialog::UnassignSingle(attribute_id) => view! {
                    <AttributeUnassignDialog vm=vm attribute_id=attribute_id />
                }.into_any(),
                DetailsDialog::UnassignBulk(ids) => view! {
                    <BulkAttributeUnassignDialog vm=vm ids=ids />
                }.into_any(),
                DetailsDialog::Remove => view! { <PageTypeRemoveDialog vm=vm /> }.into_any(),
            }}
        </div>
    }
}
