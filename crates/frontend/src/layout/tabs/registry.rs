//! Tab content registry - single source of truth for the tab.key → View
//! mapping.
//!
//! `render_tab_content` returns the matching view for a tab key. All tab
//! keys are collected here in one place.

use crate::dashboards::{AnalyticsDashboard, OverviewDashboard};
use crate::domain::a001_item::ui::list::ItemList;
use crate::domain::a002_floor::ui::details::FloorDetails;
use crate::domain::a002_floor::ui::list::FloorList;
use crate::domain::a003_room::ui::details::RoomDetails;
use crate::domain::a003_room::ui::list::RoomList;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_reports::ui::list::ReportsList;
use leptos::logging::log;
use leptos::prelude::*;

/// Render the content of a tab by its key.
///
/// # Arguments
/// * `key` - unique tab key (e.g. "a001_item", "a002_floor_detail_floor-1")
/// * `tabs_store` - context used by detail views for their on_close handler
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Dashboards (d1xx)
        // ═══════════════════════════════════════════════════════════════════
        "d100_overview" => view! { <OverviewDashboard /> }.into_any(),
        "d101_analytics" => view! { <AnalyticsDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Projections (p9xx)
        // ═══════════════════════════════════════════════════════════════════
        "p900_reports" => view! { <ReportsList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Domain aggregates (a001-a003)
        // ═══════════════════════════════════════════════════════════════════
        "a001_item" => view! { <ItemList /> }.into_any(),

        "a002_floor" => view! { <FloorList /> }.into_any(),
        k if k.starts_with("a002_floor_detail_") => {
            let id = k.strip_prefix("a002_floor_detail_").unwrap().to_string();
            view! {
                <FloorDetails
                    id=id
                    on_close=Callback::new(move |_| {
                        tabs_store.close_tab(&key_for_close);
                    })
                />
            }
            .into_any()
        }

        "a003_room" => view! { <RoomList /> }.into_any(),
        k if k.starts_with("a003_room_detail_") => {
            let id = k.strip_prefix("a003_room_detail_").unwrap().to_string();
            view! {
                <RoomDetails
                    id=id
                    on_close=Callback::new(move |_| {
                        tabs_store.close_tab(&key_for_close);
                    })
                />
            }
            .into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // Fallback
        // ═══════════════════════════════════════════════════════════════════
        unknown => {
            log!("Unknown tab key: '{}'", unknown);
            view! {
                <div class="tab-placeholder">
                    "Unknown page: " {unknown.to_string()}
                </div>
            }
            .into_any()
        }
    }
}
