use crate::domain::a003_room::ui::card::RoomCard;
use crate::shared::data::stats::{floor_by_id, items_on_floor, rollup_of, rooms_on_floor};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn FloorDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let Some(floor) = floor_by_id(&id) else {
        return view! {
            <div class="page page--missing">
                <h1>"Floor Not Found"</h1>
                <button class="button" on:click=move |_| on_close.run(())>
                    "Back to Floors"
                </button>
            </div>
        }
        .into_any();
    };

    let rollup = rollup_of(&items_on_floor(&floor.id));
    let floor_rooms = rooms_on_floor(&floor.id);

    view! {
        <div id="a002_floor--detail" data-page-category="detail" class="page">
            <div class="page-header">
                <div class="page-header__content">
                    <button class="button button--icon" title="Close" on:click=move |_| on_close.run(())>
                        {icon("arrow-left")}
                    </button>
                    <div class="page-header__text">
                        <h1 class="page-header__title">{floor.name.clone()}</h1>
                        <div class="page-header__subtitle">
                            {format!("Level {} • {}", floor.level, floor.description)}
                        </div>
                    </div>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-row">
                    <div class="stat-row__cell">
                        <span class="stat-row__value">{floor_rooms.len()}</span>
                        <span class="stat-row__label">"Rooms"</span>
                    </div>
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
                </div>

                <div class="card-grid">
                    {floor_rooms.into_iter().map(|room| {
                        view! { <RoomCard room=room /> }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
    .into_any()
}
