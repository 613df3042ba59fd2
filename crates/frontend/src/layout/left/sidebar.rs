//! Sidebar component with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Overview",
            icon: "layout-dashboard",
            items: vec![
                ("d100_overview", tab_label_for_key("d100_overview"), "layout-dashboard"),
                ("d101_analytics", tab_label_for_key("d101_analytics"), "bar-chart"),
                ("p900_reports", tab_label_for_key("p900_reports"), "file-text"),
            ],
        },
        MenuGroup {
            id: "inventory",
            label: "Inventory",
            icon: "package",
            items: vec![
                ("a001_item", tab_label_for_key("a001_item"), "package"),
                ("a002_floor", tab_label_for_key("a002_floor"), "building"),
                ("a003_room", tab_label_for_key("a003_room"), "door-open"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Both groups start expanded: the whole menu fits on screen.
    let expanded_groups = RwSignal::new(vec!["overview".to_string(), "inventory".to_string()]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                    let group_id = group.id.to_string();
                    let group_id_for_exp = group_id.clone();
                    let group_id_for_click = group_id.clone();

                    let is_expanded = move || {
                        expanded_groups.with(|items| items.contains(&group_id_for_exp))
                    };
                    let is_expanded_for_chevron = is_expanded.clone();

                    view! {
                        <div>
                            // Group header toggles expansion
                            <div
                                class="app-sidebar__item app-sidebar__item--group"
                                on:click=move |_| {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                }
                            >
                                {icon(group.icon)}
                                <span class="app-sidebar__label">{group.label}</span>
                                {move || if is_expanded_for_chevron() {
                                    icon("chevron-down")
                                } else {
                                    icon("chevron-right")
                                }}
                            </div>

                            // Child items open tabs
                            <Show when=is_expanded.clone()>
                                {group.items.iter().map(|(item_id, item_label, item_icon)| {
                                    let item_id = *item_id;
                                    let item_label = *item_label;
                                    let item_icon = *item_icon;
                                    let is_active = move || {
                                        ctx.active.get().as_deref() == Some(item_id)
                                    };
                                    view! {
                                        <div
                                            class="app-sidebar__item app-sidebar__item--child"
                                            class:app-sidebar__item--active=is_active
                                            on:click=move |_| ctx.open_tab(item_id, item_label)
                                        >
                                            {icon(item_icon)}
                                            <span class="app-sidebar__label">{item_label}</span>
                                        </div>
                                    }
                                }).collect_view()}
                            </Show>
                        </div>
                    }
            }).collect_view()}
        </div>
    }
}
