use crate::shared::icons::icon;
use leptos::prelude::*;

/// Шапка страницы: кнопка "назад", заголовок, действия справа
#[component]
pub fn PageHeader(
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Без обработчика кнопка "назад" не рисуется
    #[prop(optional)]
    on_back: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {on_back.map(|on_back| view! {
                    <button class="button button--icon page-header__back" on:click=move |_| on_back.run(())>
                        {icon("arrow-left")}
                    </button>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{move || title.get()}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
