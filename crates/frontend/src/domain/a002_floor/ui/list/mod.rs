use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::PageHeader;
use crate::shared::data::floors;
use crate::shared::data::stats::{items_on_floor, rollup_of, rooms_on_floor};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn FloorList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div id="a002_floor--list" data-page-category="list" class="page">
            <PageHeader
                title="Floors"
                subtitle="Inventory by building level".to_string()
            >
                <></>
            </PageHeader>

            <div class="page__content card-grid">
                {floors().iter().map(|floor| {
                    let rollup = rollup_of(&items_on_floor(&floor.id));
                    let room_count = rooms_on_floor(&floor.id).len();
                    let floor_id = floor.id.as_str();
                    let floor_name = floor.name.clone();
                    let open_detail = move |_| {
                        ctx.open_tab(
                            &format!("a002_floor_detail_{}", floor_id),
                            &detail_tab_label("Floor", &floor_name),
                        );
                    };

                    view! {
                        <div class="card card--clickable" on:click=open_detail>
                            <div class="card__header">
                                <span class="card__icon">{icon("building")}</span>
                                <div>
                                    <h3 class="card__title">{floor.name.clone()}</h3>
                                    <span class="card__subtitle">{format!("Level {}", floor.level)}</span>
                                </div>
                                <span class="badge">{format!("{} rooms", room_count)}</span>
                            </div>
                            <p class="card__description">{floor.description.clone()}</p>
                            <div class="card__stats">
                                <div class="card__stat">
                                    <span class="card__stat-value">{rollup.item_types}</span>
                                    <span class="card__stat-label">"Item Types"</span>
                                </div>
                                <div class="card__stat">
                                    <span class="card__stat-value">{rollup.total_quantity}</span>
                                    <span class="card__stat-label">"Total Qty"</span>
                                </div>
                                <div class="card__stat">
                                    <span class="card__stat-value">{format!("${}", rollup.total_value)}</span>
                                    <span class="card__stat-label">"Value"</span>
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
