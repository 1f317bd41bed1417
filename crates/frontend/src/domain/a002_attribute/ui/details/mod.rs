//! Карточка атрибута (только просмотр)

use crate::domain::a002_attribute::api;
use crate::shared::components::not_found_page::NotFoundPage;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::messages;
use crate::shared::navigator::use_navigator;
use contracts::domain::a002_attribute::{Attribute, AttributeType};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Debug, PartialEq)]
enum AttributeLoadState {
    Loading,
    Loaded(Attribute),
    NotFound,
    Failed(String),
}

fn attribute_type_label(attribute_type: AttributeType) -> &'static str {
    match attribute_type {
        AttributeType::PageType => "Атрибут страниц",
        AttributeType::ProductType => "Атрибут товаров",
    }
}

#[component]
pub fn AttributeDetails(id: String) -> impl IntoView {
    let navigator = use_navigator();
    let state = RwSignal::new(AttributeLoadState::Loading);

    spawn_local(async move {
        let next = match api::fetch_attribute(&id).await {
            Ok(response) => match response.attribute {
                Some(attribute) => AttributeLoadState::Loaded(attribute),
                None => AttributeLoadState::NotFound,
            },
            Err(e) => {
                log::error!("Failed to load attribute {}: {}", id, e);
                AttributeLoadState::Failed(e)
            }
        };
        state.set(next);
    });

    // Возврат туда, откуда пришли (обычно экран типа страницы)
    let on_back = Callback::new(move |_| navigator.back());

    view! {
        {move || match state.get() {
            AttributeLoadState::NotFound => view! { <NotFoundPage on_back=on_back /> }.into_any(),
            AttributeLoadState::Loading => view! {
                <div class="page page--detail">
                    <div class="page__loading">{messages::LOADING}</div>
                </div>
            }.into_any(),
            AttributeLoadState::Failed(e) => view! {
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
            AttributeLoadState::Loaded(attribute) => view! {
                <div class="page page--detail">
                    <PageHeader title=attribute.name.clone() on_back=on_back>
                        <span></span>
                    </PageHeader>
                    <div class="page__content">
                        <div class="card">
                            <div class="card__body">
                                <dl class="details-list">
                                    <dt>"Название"</dt>
                                    <dd>{attribute.name.clone()}</dd>
                                    <dt>"Код"</dt>
                                    <dd>{attribute.slug.clone()}</dd>
                                    <dt>"Тип ввода"</dt>
                                    <dd>{attribute.input_type.label()}</dd>
                                    <dt>"Назначение"</dt>
                                    <dd>{attribute_type_label(attribute.attribute_type)}</dd>
                                </dl>
                            </div>
                        </div>
                    </div>
                </div>
            }.into_any(),
        }}
    }
}
