use leptos::prelude::*;

/// Ключ строки = позиция: одинаковые сообщения (например, повторяющийся
/// DUPLICATED_INPUT_ITEM) не должны схлопываться
fn keyed(errors: Vec<String>) -> Vec<(usize, String)> {
    errors.into_iter().enumerate().collect()
}

/// Список ошибок под формой или в диалоге
#[component]
pub fn ErrorList(#[prop(into)] errors: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <For
            each=move || keyed(errors.get())
            key=|(i, _)| *i
            children=|(_, e)| view! { <div class="form__error">{e}</div> }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_messages_get_distinct_keys() {
        let rows = keyed(vec![
            "Атрибут указан дважды".to_string(),
            "Атрибут указан дважды".to_string(),
        ]);
        let keys: Vec<usize> = rows.iter().map(|(i, _)| *i).collect();
        assert_eq!(keys, vec![0, 1]);
        assert_eq!(rows[0].1, rows[1].1);
    }
}
