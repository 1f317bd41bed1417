use leptos::prelude::*;
use thaw::*;

/// Чекбокс выбора строки. Клик не всплывает до строки (она открывает объект).
#[component]
pub fn TableCellCheckbox(
    #[prop(into)] item_id: String,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(item_id.clone())
            />
        </TableCell>
    }
}
