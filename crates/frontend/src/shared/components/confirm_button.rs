//! Кнопка подтверждения с индикацией состояния мутации

use crate::shared::icons::icon;
use crate::shared::messages;
use leptos::prelude::*;
use thaw::*;

/// Состояние выполнения удалённой операции
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmButtonState {
    #[default]
    Default,
    Loading,
    Success,
    Error,
}

impl ConfirmButtonState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ConfirmButtonState::Loading)
    }
}

#[component]
pub fn ConfirmButton(
    #[prop(into)] state: Signal<ConfirmButtonState>,
    #[prop(into)] label: String,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] danger: bool,
    on_click: Callback<()>,
) -> impl IntoView {
    let label = StoredValue::new(label);
    let is_disabled =
        Signal::derive(move || state.get().is_loading() || disabled.get().unwrap_or(false));
    let class = if danger {
        "confirm-button confirm-button--danger"
    } else {
        "confirm-button"
    };

    view! {
        <Button
            appearance=ButtonAppearance::Primary
            class=class
            disabled=is_disabled
            on_click=move |_| on_click.run(())
        >
            {move || match state.get() {
                ConfirmButtonState::Loading => view! { <span>{messages::LOADING}</span> }.into_any(),
                ConfirmButtonState::Success => view! {
                    <span>{icon("check")} " " {messages::SAVED}</span>
                }.into_any(),
                ConfirmButtonState::Error => view! {
                    <span>{icon("alert")} " " {label.get_value()}</span>
                }.into_any(),
                ConfirmButtonState::Default => view! { <span>{label.get_value()}</span> }.into_any(),
            }}
        </Button>
    }
}
