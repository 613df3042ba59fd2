use crate::domain::a001_item::ui::table::ItemTable;
use crate::shared::components::bar_chart::{BarChart, BarRow};
use crate::shared::data::stats::{
    category_shares, floor_by_id, items_in_room, rollup_of, room_by_id,
};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn RoomDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let Some(room) = room_by_id(&id) else {
        return view! {
            <div class="page page--missing">
                <h1>"Room Not Found"</h1>
                <button class="button" on:click=move |_| on_close.run(())>
                    "Back to Rooms"
                </button>
            </div>
        }
        .into_any();
    };

    let floor_name = floor_by_id(room.floor_id.as_str())
        .map(|f| f.name.clone())
        .unwrap_or_default();
    let room_items = items_in_room(&room.id);
    let rollup = rollup_of(&room_items);

    let category_rows: Vec<BarRow> = category_shares(&room_items)
        .into_iter()
        .map(|share| BarRow {
            label: share.name,
            value: share.quantity as f64,
            display: format!("{} pcs / {} positions", share.quantity, share.item_count),
            color_class: "bar-chart__bar--primary",
        })
        .collect();

    let items_for_table = room_items.clone();

    view! {
        <div id="a003_room--detail" data-page-category="detail" class="page">
            <div class="page-header">
                <div class="page-header__content">
                    <button class="button button--icon" title="Close" on:click=move |_| on_close.run(())>
                        {icon("arrow-left")}
                    </button>
                    <div class="page-header__text">
                        <h1 class="page-header__title">{room.name.clone()}</h1>
                        <div class="page-header__subtitle">
                            {format!("{} • {}", room.room_type, floor_name)}
                        </div>
                    </div>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-row">
                    <div class="stat-row__cell">
                        <span class="stat-row__value">{rollup.item_types}</span>
                        <span class="stat-row__label">"Item Types"</span>
                    </div>
                    <div class="stat-row__cell">
                        <span class="stat-row__value">{rollup.total_quantity}</span>
                        <span class="stat-row__label">"Total Quantity"</span>
                    </div>
                    <div class="stat-row__cell">
                        <span class="stat-row__value">{format!("${}", rollup.total_value)}</span>
                        <span class="stat-row__label">"Total Value"</span>
                    </div>
                    <div class="stat-row__cell">
                        <span class="stat-row__value">
                            {if room.capacity > 0 { room.capacity.to_string() } else { "—".to_string() }}
                        </span>
                        <span class="stat-row__label">"Capacity"</span>
                    </div>
                </div>

                <p class="page__description">{room.description.clone()}</p>

                {(!category_rows.is_empty()).then(|| view! {
                    <section class="panel">
                        <h2 class="panel__title">"Quantity by Category"</h2>
                        <BarChart rows=category_rows.clone() />
                    </section>
                })}

                <section class="panel">
                    <h2 class="panel__title">"Items in This Room"</h2>
                    <ItemTable items=Signal::derive(move || items_for_table.clone()) />
                </section>
            </div>
        </div>
    }
    .into_any()
}
