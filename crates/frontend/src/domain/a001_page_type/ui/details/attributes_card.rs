use super::view_model::PageTypeDetailsVm;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::icons::icon;
use contracts::domain::a002_attribute::Attribute;
use leptos::prelude::*;
use thaw::*;

const TABLE_ID: &str = "page-type-attributes-table";

#[component]
pub fn AttributesCard(vm: PageTypeDetailsVm) -> impl IntoView {
    let attributes = Memo::new(move |_| {
        vm.load_state
            .with(|s| s.page_type().map(|pt| pt.attributes.clone()).unwrap_or_default())
    });
    let all_ids = Signal::derive(move || {
        attributes.with(|list| list.iter().map(|a| a.id.clone()).collect::<Vec<_>>())
    });
    let selected = Signal::derive(move || vm.bulk.list_elements());
    let has_selection = move || vm.bulk.selected_count() > 0;

    // id перетаскиваемой строки
    let dragged = RwSignal::new(None::<String>);

    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">"Атрибуты содержимого"</h3>
                <div class="card__actions">
                    <Show
                        when=has_selection
                        fallback=move || view! {
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.open_assign()>
                                {icon("plus")}
                                " Назначить атрибут"
                            </Button>
                        }
                    >
                        <span class="card__selection">
                            {move || format!("Выбрано: {}", vm.bulk.selected_count())}
                        </span>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.open_bulk_unassign()>
                            {icon("trash")}
                            " Открепить"
                        </Button>
                    </Show>
                </div>
            </div>
            <div class="card__body">
                <Show
                    when=move || !attributes.with(|list| list.is_empty())
                    fallback=|| view! { <div class="card__empty">"Атрибуты не назначены"</div> }
                >
                    <Table attr:id=TABLE_ID attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=32.0></TableHeaderCell>
                                <TableHeaderCheckbox
                                    all_ids=all_ids
                                    selected=selected
                                    on_toggle_all=Callback::new(move |_| vm.bulk.toggle_all(&all_ids.get_untracked()))
                                />
                                <TableHeaderCell resizable=false min_width=160.0>"Название"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Код"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Тип ввода"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=48.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || attributes.get().into_iter().enumerate()
                                key=|(_, a)| a.id.clone()
                                children=move |(index, attribute)| {
                                    view! { <AttributeRow vm=vm attribute=attribute index=index dragged=dragged /> }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn AttributeRow(
    vm: PageTypeDetailsVm,
    attribute: Attribute,
    index: usize,
    dragged: RwSignal<Option<String>>,
) -> impl IntoView {
    let id = StoredValue::new(attribute.id.clone());
    let checked = Signal::derive(move || vm.bulk.is_selected(&id.get_value()));

    view! {
        <TableRow
            class="table__row--clickable"
            attr:draggable="true"
            on:dragstart=move |_| dragged.set(Some(id.get_value()))
            on:dragover=|ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                if let Some(source) = dragged.get_untracked() {
                    vm.reorder_attribute(source, index);
                }
                dragged.set(None);
            }
            on:click=move |_| vm.open_attribute(id.get_value())
        >
            <TableCell class="table__drag-handle">{icon("grip")}</TableCell>
            <TableCellCheckbox
                item_id=attribute.id.clone()
                checked=checked
                on_toggle=Callback::new(move |id: String| vm.bulk.toggle(&id))
            />
            <TableCell>
                <TableCellLayout truncate=true>
                    <span style="font-weight: 500;">{attribute.name.clone()}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{attribute.slug.clone()}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{attribute.input_type.label()}</TableCellLayout>
            </TableCell>
            <TableCell on:click=|e| e.stop_propagation()>
                <button
                    class="button button--icon"
                    title="Открепить"
                    on:click=move |_| vm.open_unassign(id.get_value())
                >
                    {icon("trash")}
                </button>
            </TableCell>
        </TableRow>
    }
}
