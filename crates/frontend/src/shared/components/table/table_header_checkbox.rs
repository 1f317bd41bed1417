//! Чекбокс "выбрать все" в заголовке таблицы

use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

fn checkbox_state(all: &[String], selected: &[String]) -> CheckboxState {
    if all.is_empty() {
        return CheckboxState::Unchecked;
    }
    let selected_count = all.iter().filter(|id| selected.contains(id)).count();
    if selected_count == 0 {
        CheckboxState::Unchecked
    } else if selected_count == all.len() {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

/// Три состояния: ничего не выбрано, выбрано всё, выбрано частично.
/// Клик вызывает `on_toggle_all`, решение о выборе/сбросе принимает владелец списка.
#[component]
pub fn TableHeaderCheckbox(
    /// ID всех строк таблицы
    #[prop(into)]
    all_ids: Signal<Vec<String>>,
    /// Выбранные ID
    #[prop(into)]
    selected: Signal<Vec<String>>,
    on_toggle_all: Callback<()>,
) -> impl IntoView {
    let state = Memo::new(move |_| all_ids.with(|all| selected.with(|sel| checkbox_state(all, sel))));
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate нельзя задать атрибутом
    Effect::new(move |_| {
        let is_indeterminate = matches!(state.get(), CheckboxState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(is_indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(state.get(), CheckboxState::Checked)
                on:change=move |_| on_toggle_all.run(())
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_checkbox_state() {
        let all = ids(&["1", "2"]);
        assert_eq!(checkbox_state(&all, &[]), CheckboxState::Unchecked);
        assert_eq!(checkbox_state(&all, &ids(&["2"])), CheckboxState::Indeterminate);
        assert_eq!(checkbox_state(&all, &ids(&["2", "1"])), CheckboxState::Checked);
        assert_eq!(checkbox_state(&[], &ids(&["1"])), CheckboxState::Unchecked);
    }
}
