//! Sortable inventory table, reused by the items list, the room detail
//! page and the overview dashboard.

use crate::domain::a001_item::ui::qr_label::LabelDialog;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::sort_list;
use contracts::domain::a001_item::InventoryItem;
use contracts::enums::ItemStatus;
use leptos::prelude::*;

pub fn status_badge(status: ItemStatus) -> AnyView {
    let class = match status {
        ItemStatus::Available => "badge badge--success",
        ItemStatus::LowStock => "badge badge--warning",
        ItemStatus::OutOfStock => "badge badge--error",
    };
    view! { <span class=class>{status.display_name()}</span> }.into_any()
}

#[component]
fn SortHeader(
    label: &'static str,
    field: &'static str,
    sort_field: RwSignal<String>,
    sort_ascending: RwSignal<bool>,
) -> impl IntoView {
    let handle_sort = move |_| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|asc| *asc = !*asc);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    };

    view! {
        <th>
            <button class="table-sort" on:click=handle_sort>
                {label}
                {icon("arrow-up-down")}
            </button>
        </th>
    }
}

#[component]
pub fn ItemTable(#[prop(into)] items: Signal<Vec<InventoryItem>>) -> impl IntoView {
    let sort_field = RwSignal::new("name".to_string());
    let sort_ascending = RwSignal::new(true);
    let qr_item = RwSignal::new(None::<InventoryItem>);

    let sorted = Memo::new(move |_| {
        let mut list = items.get();
        sort_list(&mut list, &sort_field.get(), sort_ascending.get());
        list
    });

    view! {
        <div class="table-wrap">
            <table class="list-table">
                <thead>
                    <tr>
                        <SortHeader label="Item Name" field="name" sort_field=sort_field sort_ascending=sort_ascending />
                        <SortHeader label="Category" field="category" sort_field=sort_field sort_ascending=sort_ascending />
                        <SortHeader label="Qty" field="quantity" sort_field=sort_field sort_ascending=sort_ascending />
                        <SortHeader label="Status" field="status" sort_field=sort_field sort_ascending=sort_ascending />
                        <th>"Location"</th>
                        <SortHeader label="Last Updated" field="updated" sort_field=sort_field sort_ascending=sort_ascending />
                        <SortHeader label="Value" field="value" sort_field=sort_field sort_ascending=sort_ascending />
                        <th>"QR"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || sorted.get()
                        key=|item| item.id.as_str().to_string()
                        children=move |item: InventoryItem| {
                            let item_for_qr = item.clone();
                            view! {
                                <tr>
                                    <td class="list-table__name">{item.name.clone()}</td>
                                    <td>{item.category.clone()}</td>
                                    <td>{item.quantity}</td>
                                    <td>{status_badge(item.status)}</td>
                                    <td>{item.location.clone()}</td>
                                    <td>{format_date(item.last_updated)}</td>
                                    <td>{format!("${}", item.value)}</td>
                                    <td>
                                        <button
                                            class="button button--icon"
                                            title="Generate QR Code"
                                            on:click=move |_| qr_item.set(Some(item_for_qr.clone()))
                                        >
                                            {icon("qr-code")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || qr_item.get().map(|item| view! {
                <LabelDialog
                    item=item
                    on_close=Callback::new(move |_| qr_item.set(None))
                />
            })}
        </div>
    }
}
