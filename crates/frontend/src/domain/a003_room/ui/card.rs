//! Room summary card, shared by the rooms list and the floor detail page.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::data::stats::{items_in_room, rollup_of};
use crate::shared::icons::icon;
use contracts::domain::a003_room::Room;
use leptos::prelude::*;

#[component]
pub fn RoomCard(room: Room) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let rollup = rollup_of(&items_in_room(&room.id));
    let room_id = room.id.as_str().to_string();
    let room_name = room.name.clone();
    let open_detail = move |_| {
        ctx.open_tab(
            &format!("a003_room_detail_{}", room_id),
            &detail_tab_label("Room", &room_name),
        );
    };

    let capacity_badge = (room.capacity > 0).then(|| {
        view! {
            <span class="badge badge--outline">
                {icon("users")}
                {room.capacity}
            </span>
        }
    });

    let status_badges = view! {
        <div class="card__badges">
            {(rollup.status.available > 0).then(|| view! {
                <span class="badge badge--success">{format!("{} OK", rollup.status.available)}</span>
            })}
            {(rollup.status.low_stock > 0).then(|| view! {
                <span class="badge badge--warning">{format!("{} Low", rollup.status.low_stock)}</span>
            })}
            {(rollup.status.out_of_stock > 0).then(|| view! {
                <span class="badge badge--error">{format!("{} Out", rollup.status.out_of_stock)}</span>
            })}
        </div>
    };

    view! {
        <div class="card card--clickable" on:click=open_detail>
            <div class="card__header">
                <span class="card__icon">{icon("door-open")}</span>
                <div>
                    <h3 class="card__title">{room.name.clone()}</h3>
                    <span class="card__subtitle">{room.room_type.clone()}</span>
                </div>
                {capacity_badge}
            </div>
            <p class="card__description">{room.description.clone()}</p>
            <div class="card__stats">
                <div class="card__stat">
                    <span class="card__stat-value">{rollup.item_types}</span>
                    <span class="card__stat-label">"Item Types"</span>
                </div>
                <div class="card__stat">
                    <span class="card__stat-value">{rollup.total_quantity}</span>
                    <span class="card__stat-label">"Total Qty"</span>
                </div>
            </div>
            {status_badges}
        </div>
    }
}
