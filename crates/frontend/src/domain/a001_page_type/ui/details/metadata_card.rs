use super::model::PageTypeFormDto;
use super::view_model::PageTypeDetailsVm;
use crate::shared::icons::icon;
use contracts::shared::metadata::MetadataItem;
use leptos::prelude::*;
use thaw::*;

fn items_mut(form: &mut PageTypeFormDto, is_private: bool) -> &mut Vec<MetadataItem> {
    if is_private {
        &mut form.private_metadata
    } else {
        &mut form.metadata
    }
}

fn items(form: &PageTypeFormDto, is_private: bool) -> &[MetadataItem] {
    if is_private {
        &form.private_metadata
    } else {
        &form.metadata
    }
}

/// Редактор публичных или приватных метаданных
#[component]
pub fn MetadataCard(vm: PageTypeDetailsVm, is_private: bool) -> impl IntoView {
    let title = if is_private {
        "Приватные метаданные"
    } else {
        "Метаданные"
    };
    let count = move || vm.form.with(|f| items(f, is_private).len());

    let add_field = move |_| {
        vm.form
            .update(|f| items_mut(f, is_private).push(MetadataItem::new("", "")));
    };

    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">{title}</h3>
                <span class="card__subtitle">{move || format!("Полей: {}", count())}</span>
            </div>
            <div class="card__body">
                // Строки адресуются по позиции: ключ может редактироваться
                <For
                    each=move || 0..count()
                    key=|index| *index
                    children=move |index| {
                        let key = move || vm.form.with(|f| {
                            items(f, is_private).get(index).map(|i| i.key.clone()).unwrap_or_default()
                        });
                        let value = move || vm.form.with(|f| {
                            items(f, is_private).get(index).map(|i| i.value.clone()).unwrap_or_default()
                        });
                        view! {
                            <div class="metadata__row">
                                <input
                                    class="form__input metadata__key"
                                    type="text"
                                    placeholder="Ключ"
                                    prop:value=key
                                    on:input=move |ev| {
                                        let text = event_target_value(&ev);
                                        vm.form.update(|f| {
                                            if let Some(item) = items_mut(f, is_private).get_mut(index) {
                                                item.key = text;
                                            }
                                        });
                                    }
                                />
                                <input
                                    class="form__input metadata__value"
                                    type="text"
                                    placeholder="Значение"
                                    prop:value=value
                                    on:input=move |ev| {
                                        let text = event_target_value(&ev);
                                        vm.form.update(|f| {
                                            if let Some(item) = items_mut(f, is_private).get_mut(index) {
                                                item.value = text;
                                            }
                                        });
                                    }
                                />
                                <button
                                    class="button button--icon"
                                    title="Удалить поле"
                                    on:click=move |_| {
                                        vm.form.update(|f| {
                                            let list = items_mut(f, is_private);
                                            if index < list.len() {
                                                list.remove(index);
                                            }
                                        });
                                    }
                                >
                                    {icon("trash")}
                                </button>
                            </div>
                        }
                    }
                />
                <Button appearance=ButtonAppearance::Subtle on_click=add_field>
                    {icon("plus")}
                    " Добавить поле"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_mut_picks_kind() {
        let mut form = PageTypeFormDto::default();
        items_mut(&mut form, true).push(MetadataItem::new("a", "1"));
        items_mut(&mut form, false).push(MetadataItem::new("b", "2"));
        assert_eq!(form.private_metadata, vec![MetadataItem::new("a", "1")]);
        assert_eq!(items(&form, false), [MetadataItem::new("b", "2")].as_slice());
    }
}
