use crate::domain::a003_room::ui::card::RoomCard;
use crate::shared::components::PageHeader;
use crate::shared::data::floors;
use crate::shared::data::stats::rooms_on_floor;
use leptos::prelude::*;

/// All rooms, grouped by floor.
#[component]
pub fn RoomList() -> impl IntoView {
    view! {
        <div id="a003_room--list" data-page-category="list" class="page">
            <PageHeader
                title="Rooms"
                subtitle="Every room with its tracked inventory".to_string()
            >
                <></>
            </PageHeader>

            <div class="page__content">
                {floors().iter().map(|floor| {
                    let floor_rooms = rooms_on_floor(&floor.id);
                    view! {
                        <section class="room-section">
                            <h2 class="room-section__title">{floor.name.clone()}</h2>
                            <div class="card-grid">
                                {floor_rooms.into_iter().map(|room| {
                                    view! { <RoomCard room=room /> }
                                }).collect_view()}
                            </div>
                        </section>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
