use super::state::{create_state, ItemListState};
use crate::domain::a001_item::ui::table::ItemTable;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::PageHeader;
use crate::shared::data::{categories, inventory_items};
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::filter_list;
use contracts::enums::ItemStatus;
use leptos::prelude::*;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();

    // The global search stashes a text filter for this list before opening
    // the tab; pick it up here (also while the tab is already open).
    Effect::new(move |_| {
        let stashed = ctx.form_states.with(|s| s.contains_key("a001_item"));
        if stashed {
            if let Some(value) = ctx.take_form_state("a001_item") {
                if let Some(q) = value.get("q").and_then(|v| v.as_str()) {
                    let q = q.to_string();
                    state.update(|s| s.q = q);
                }
            }
        }
    });

    let filtered = Memo::new(move |_| {
        let ItemListState { q, category, status } = state.get();
        let mut items = filter_list(inventory_items().to_vec(), &q);
        if category != "all" {
            items.retain(|i| i.category == category);
        }
        if status != "all" {
            items.retain(|i| i.status.code() == status);
        }
        items
    });

    let found_subtitle = move || format!("{} items found", filtered.get().len());

    let handle_export = move |_| {
        if let Err(err) = export_to_csv(&filtered.get_untracked(), "inventory-items.csv") {
            log::error!("CSV export failed: {}", err);
        }
    };

    view! {
        <div id="a001_item--list" data-page-category="list" class="page">
            <PageHeader title="Inventory Items" subtitle=Signal::derive(found_subtitle)>
                <button class="button" on:click=handle_export>
                    {icon("download")}
                    "Export"
                </button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-row">
                    <div class="filter-row__search">
                        {icon("search")}
                        <input
                            type="text"
                            placeholder="Search items..."
                            prop:value=move || state.with(|s| s.q.clone())
                            on:input=move |ev| {
                                let q = event_target_value(&ev);
                                state.update(|s| s.q = q);
                            }
                        />
                    </div>

                    <select
                        class="filter-row__select"
                        on:change=move |ev| {
                            let category = event_target_value(&ev);
                            state.update(|s| s.category = category);
                        }
                    >
                        <option value="all" selected=move || state.with(|s| s.category == "all")>
                            "All Categories"
                        </option>
                        {categories().iter().map(|cat| {
                            let name = cat.name;
                            view! {
                                <option
                                    value=name
                                    selected=move || state.with(|s| s.category == name)
                                >
                                    {name}
                                </option>
                            }
                        }).collect_view()}
                    </select>

                    <select
                        class="filter-row__select"
                        on:change=move |ev| {
                            let status = event_target_value(&ev);
                            state.update(|s| s.status = status);
                        }
                    >
                        <option value="all" selected=move || state.with(|s| s.status == "all")>
                            "All Statuses"
                        </option>
                        {ItemStatus::all().into_iter().map(|status| {
                            let code = status.code();
                            view! {
                                <option
                                    value=code
                                    selected=move || state.with(|s| s.status == code)
                                >
                                    {status.display_name()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <ItemTable items=filtered />
            </div>
        </div>
    }
}
