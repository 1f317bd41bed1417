use super::view_model::PageTypeDetailsVm;
use crate::shared::components::error_list::ErrorList;
use contracts::shared::errors::error_for_field;
use leptos::prelude::*;

#[component]
pub fn GeneralInfoCard(vm: PageTypeDetailsVm) -> impl IntoView {
    let name_error = move || {
        vm.errors
            .with(|e| error_for_field(&e.form, "name").map(|err| err.text()))
    };
    // Ошибки без поля "name" (метаданные, транспорт) выводим списком
    let other_errors = move || {
        vm.errors.with(|e| {
            e.form
                .iter()
                .filter(|err| err.field.as_deref() != Some("name"))
                .map(|err| err.text())
                .collect::<Vec<_>>()
        })
    };
    let is_loading = move || vm.update_state.get().is_loading();

    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">"Основная информация"</h3>
            </div>
            <div class="card__body">
                <div class="form__group">
                    <label class="form__label" for="page-type-name">"Название"</label>
                    <input
                        id="page-type-name"
                        class="form__input"
                        class:form__input--error=move || name_error().is_some()
                        type="text"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        prop:disabled=is_loading
                        on:input=move |ev| {
                            vm.form.update(|f| f.name = event_target_value(&ev));
                        }
                        placeholder="Например: Статья"
                    />
                    {move || name_error().map(|text| view! { <div class="form__error">{text}</div> })}
                </div>
                <ErrorList errors=Signal::derive(other_errors) />
            </div>
        </div>
    }
}
