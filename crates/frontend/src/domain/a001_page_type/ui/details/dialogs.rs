//! Диалоги экрана типа страницы. Какой из них открыт, решает URL.

use super::model::ErrorSlot;
use super::view_model::PageTypeDetailsVm;
use crate::shared::components::action_dialog::ActionDialog;
use crate::shared::components::confirm_button::ConfirmButton;
use crate::shared::components::error_list::ErrorList;
use crate::shared::icons::icon;
use crate::shared::messages;
use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;
use thaw::*;

fn quoted_or_placeholder(value: Option<String>) -> String {
    match value {
        Some(v) => format!("«{}»", v),
        None => messages::PLACEHOLDER.to_string(),
    }
}

#[component]
pub fn AssignAttributeDialog(
    vm: PageTypeDetailsVm,
    /// Выбранные id из `ids`
    #[prop(into)]
    selected: Signal<Vec<String>>,
) -> impl IntoView {
    let search = vm.search;
    let query = RwSignal::new(search.query());

    // Первый запуск = refetch при открытии, далее поиск по вводу
    Effect::new(move |_| {
        let q = query.get();
        search.search(q);
    });

    let on_close = Callback::new(move |_| vm.close_modal());
    let on_submit = Callback::new(move |_| vm.assign(selected.get_untracked()));
    let errors = Signal::derive(move || {
        let mut texts = vm.errors.with(|e| e.texts(ErrorSlot::AddAttribute));
        if let Some(e) = search.error.get() {
            texts.push(e);
        }
        texts
    });

    view! {
        <ModalFrame on_close=on_close modal_class="assign-attribute-dialog">
            <div class="modal-header">
                <h2 class="modal-title">"Назначить атрибуты"</h2>
                <div class="modal-header-actions">
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
            </div>
            <div class="modal-body">
                <div class="assign-attribute-dialog__search">
                    {icon("search")}
                    <Input value=query placeholder="Поиск по названию или коду" />
                </div>
                <div class="assign-attribute-dialog__list">
                    <For
                        each=move || search.attributes()
                        key=|a| a.id.clone()
                        children=move |attribute| {
                            let id = attribute.id.clone();
                            let id_for_check = id.clone();
                            view! {
                                <label class="assign-attribute-dialog__row">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selected.with(|ids| ids.contains(&id_for_check))
                                        on:change=move |_| vm.toggle_assign_id(id.clone())
                                    />
                                    <span class="assign-attribute-dialog__name">{attribute.name.clone()}</span>
                                    <span class="assign-attribute-dialog__slug">{attribute.slug.clone()}</span>
                                </label>
                            }
                        }
                    />
                    <Show when=move || search.loading.get()>
                        <div class="assign-attribute-dialog__loading">{messages::LOADING}</div>
                    </Show>
                    <Show when=move || !search.loading.get() && search.attributes().is_empty()>
                        <div class="assign-attribute-dialog__empty">"Нет доступных атрибутов"</div>
                    </Show>
                </div>
                <Show when=move || search.has_more()>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        disabled=Signal::derive(move || search.loading.get())
                        on_click=move |_| search.load_more()
                    >
                        {messages::LOAD_MORE}
                    </Button>
                </Show>
                <ErrorList errors=errors />
            </div>
            <div class="modal-actions">
                <span class="assign-attribute-dialog__count">
                    {move || format!("Выбрано: {}", selected.with(|ids| ids.len()))}
                </span>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    {messages::CANCEL}
                </Button>
                <ConfirmButton
                    state=vm.assign_state
                    label=messages::ASSIGN
                    disabled=Signal::derive(move || selected.with(|ids| ids.is_empty()))
                    on_click=on_submit
                />
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn AttributeUnassignDialog(vm: PageTypeDetailsVm, attribute_id: String) -> impl IntoView {
    let attribute_id = StoredValue::new(attribute_id);
    let text = move || {
        let (attribute_name, page_type_name) = vm.load_state.with(|s| match s.page_type() {
            Some(pt) => (
                pt.find_attribute(&attribute_id.get_value()).map(|a| a.name.clone()),
                Some(pt.name.clone()),
            ),
            None => (None, None),
        });
        format!(
            "Открепить атрибут {} от типа страницы {}?",
            quoted_or_placeholder(attribute_name),
            quoted_or_placeholder(page_type_name)
        )
    };

    view! {
        <ActionDialog
            title="Открепить атрибут"
            confirm_label=messages::UNASSIGN
            confirm_state=vm.unassign_state
            errors=Signal::derive(move || vm.errors.with(|e| e.texts(ErrorSlot::UnassignAttribute)))
            danger=true
            on_close=Callback::new(move |_| vm.close_modal())
            on_confirm=Callback::new(move |_| vm.unassign(vec![attribute_id.get_value()]))
        >
            <p>{text}</p>
        </ActionDialog>
    }
}

#[component]
pub fn BulkAttributeUnassignDialog(vm: PageTypeDetailsVm, ids: Vec<String>) -> impl IntoView {
    let count = ids.len();
    let ids = StoredValue::new(ids);
    let page_type_name = move || quoted_or_placeholder(vm.page_name());

    view! {
        <ActionDialog
            title="Открепить атрибуты"
            confirm_label=messages::UNASSIGN
            confirm_state=vm.unassign_state
            errors=Signal::derive(move || vm.errors.with(|e| e.texts(ErrorSlot::UnassignAttribute)))
            danger=true
            on_close=Callback::new(move |_| vm.close_modal())
            on_confirm=Callback::new(move |_| vm.unassign(ids.get_value()))
        >
            <p>{move || format!(
                "Открепить выбранные атрибуты ({}) от типа страницы {}?",
                count,
                page_type_name()
            )}</p>
        </ActionDialog>
    }
}

#[component]
pub fn PageTypeRemoveDialog(vm: PageTypeDetailsVm) -> impl IntoView {
    view! {
        <ActionDialog
            title="Удалить тип страницы"
            confirm_label=messages::DELETE
            confirm_state=vm.delete_state
            errors=vm.delete_errors
            danger=true
            on_close=Callback::new(move |_| vm.close_modal())
            on_confirm=Callback::new(move |_| vm.delete())
        >
            <p>{move || format!(
                "Удалить тип страницы {}? Действие нельзя отменить.",
                quoted_or_placeholder(vm.page_name())
            )}</p>
        </ActionDialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_for_missing_names() {
        assert_eq!(quoted_or_placeholder(None), "...");
        assert_eq!(quoted_or_placeholder(Some("Цвет".into())), "«Цвет»");
    }
}
