//! Global search box in the top header.
//!
//! Searches pages, floors, rooms and items as the user types and shows the
//! ranked results in a dropdown. Keyboard protocol: ArrowDown/ArrowUp move
//! the selection, Enter opens the selected target, Escape clears the query,
//! Ctrl/Cmd-K focuses the input from anywhere.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::search::{search_all, SearchResult};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Open the picked result: stash the item filter (if any), open the tab and
/// reset the box.
fn open_result(
    ctx: AppGlobalContext,
    query: RwSignal<String>,
    selected: RwSignal<usize>,
    result: &SearchResult,
) {
    if let Some(filter) = &result.item_filter {
        ctx.set_form_state(
            "a001_item".to_string(),
            serde_json::json!({ "q": filter }),
        );
    }
    ctx.open_tab(&result.tab_key, &result.tab_title);
    query.set(String::new());
    selected.set(0);
}

#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(0_usize);
    let input_ref = NodeRef::<html::Input>::new();

    let results = Memo::new(move |_| search_all(&query.get()));
    let is_open = move || !results.get().is_empty();

    // Ctrl/Cmd-K focuses the search input from anywhere on the page.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                let combo = keyboard_event.ctrl_key() || keyboard_event.meta_key();
                if combo && keyboard_event.key() == "k" {
                    keyboard_event.prevent_default();
                    if let Some(input) = input_ref.get_untracked() {
                        let _ = input.focus();
                    }
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let on_key_down = move |ev: ev::KeyboardEvent| {
        let items = results.get_untracked();
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                let last = items.len().saturating_sub(1);
                selected.update(|i| *i = (*i + 1).min(last));
            }
            "ArrowUp" => {
                ev.prevent_default();
                selected.update(|i| *i = i.saturating_sub(1));
            }
            "Enter" => {
                if let Some(result) = items.get(selected.get_untracked()) {
                    open_result(ctx, query, selected, result);
                }
            }
            "Escape" => {
                query.set(String::new());
                selected.set(0);
            }
            _ => {}
        }
    };

    view! {
        <div class="search-box">
            <span class="search-box__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-box__input"
                placeholder="Search... (Ctrl+K)"
                node_ref=input_ref
                prop:value=move || query.get()
                on:input=move |ev| {
                    query.set(event_target_value(&ev));
                    selected.set(0);
                }
                on:keydown=on_key_down
            />
            <Show when=is_open>
                <div class="search-box__results">
                    {move || {
                        let current_query = query.get();
                        results
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, result)| {
                                let is_selected = move || selected.get() == index;
                                let result_for_click = result.clone();
                                view! {
                                    <div
                                        class="search-box__result"
                                        class:search-box__result--selected=is_selected
                                        on:mousedown=move |_| {
                                            open_result(ctx, query, selected, &result_for_click);
                                        }
                                    >
                                        {icon(result.icon)}
                                        <div class="search-box__result-text">
                                            <span class="search-box__result-title">
                                                {highlight_matches(&result.title, &current_query)}
                                            </span>
                                            <span class="search-box__result-subtitle">{result.subtitle.clone()}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
