use super::confirm_button::{ConfirmButton, ConfirmButtonState};
use super::error_list::ErrorList;
use crate::shared::icons::icon;
use crate::shared::messages;
use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;
use thaw::*;

/// Диалог "заголовок + текст + Отмена/Подтвердить"
#[component]
pub fn ActionDialog(
    #[prop(into)] title: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] confirm_state: Signal<ConfirmButtonState>,
    /// Ошибки, которые вернула операция
    #[prop(optional, into)]
    errors: Signal<Vec<String>>,
    #[prop(optional)] danger: bool,
    on_close: Callback<()>,
    on_confirm: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <ModalFrame on_close=on_close modal_class="action-dialog">
            <div class="modal-header">
                <h2 class="modal-title">{title}</h2>
                <div class="modal-header-actions">
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
            </div>
            <div class="modal-body">
                {children()}
                <ErrorList errors=errors />
            </div>
            <div class="modal-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    {messages::CANCEL}
                </Button>
                <ConfirmButton
                    state=confirm_state
                    label=confirm_label
                    danger=danger
                    on_click=on_confirm
                />
            </div>
        </ModalFrame>
    }
}
