use crate::domain::a001_page_type::api;
use crate::domain::a001_page_type::urls::page_type_url;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::messages;
use crate::shared::navigator::use_navigator;
use contracts::domain::a001_page_type::PageTypeListItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TABLE_ID: &str = "page-type-list-table";

#[component]
pub fn PageTypeList() -> impl IntoView {
    let navigator = use_navigator();
    let items: RwSignal<Vec<PageTypeListItem>> = RwSignal::new(Vec::new());
    let error = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let load = move || {
        is_loading.set(true);
        spawn_local(async move {
            match api::fetch_page_types().await {
                Ok(list) => {
                    items.set(list);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load page types: {}", e);
                    error.set(Some(e));
                }
            }
            is_loading.set(false);
        });
    };
    load();

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title("Типы страниц");
    }

    view! {
        <div class="page">
            <PageHeader title="Типы страниц".to_string() subtitle="Структура содержимого страниц".to_string()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || is_loading.get())
                >
                    {icon("search")}
                    {move || if is_loading.get() { " Загрузка..." } else { " Обновить" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">{icon("alert")}</span>
                        <span class="warning-box__text">{messages::SOMETHING_WENT_WRONG}": "{e}</span>
                    </div>
                })}

                <Table attr:id=TABLE_ID attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=200.0>"Название"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=160.0>"Код"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Атрибутов"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|pt| pt.id.clone()
                            children=move |pt| {
                                let url = page_type_url(&pt.id, None);
                                view! {
                                    <TableRow
                                        class="table__row--clickable"
                                        on:click=move |_| navigator.navigate(&url, false)
                                    >
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">{pt.name.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{pt.slug.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{pt.attribute_count}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
