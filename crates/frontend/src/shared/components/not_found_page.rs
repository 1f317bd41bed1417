use crate::shared::icons::icon;
use crate::shared::messages;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn NotFoundPage(on_back: Callback<()>) -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <div class="not-found">
                <h1 class="not-found__title">{messages::NOT_FOUND_TITLE}</h1>
                <p class="not-found__text">{messages::NOT_FOUND_TEXT}</p>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_back.run(())>
                    {icon("arrow-left")}
                    " "
                    {messages::BACK}
                </Button>
            </div>
        </div>
    }
}
