use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    pub form_states: RwSignal<HashMap<String, serde_json::Value>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            form_states: RwSignal::new(HashMap::new()),
        }
    }

    pub fn set_form_state(&self, form_key: String, state: serde_json::Value) {
        self.form_states.update(|states| {
            states.insert(form_key, state);
        });
    }

    /// Remove and return a page's stashed state (one-shot handoff, e.g. the
    /// global search seeding the items list filter).
    pub fn take_form_state(&self, form_key: &str) -> Option<serde_json::Value> {
        let mut taken = None;
        self.form_states.update(|states| {
            taken = states.remove(form_key);
        });
        taken
    }

    /// Restore the active tab from `?active=` and mirror it back into the
    /// URL via the History API whenever it changes.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active").cloned() {
            let exists = self
                .opened
                .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == active_key));
            if !exists {
                let label = crate::layout::tabs::tab_label_for_key(&active_key);
                // Detail keys are not in the label table; reuse the key.
                let title = if label.is_empty() {
                    active_key.clone()
                } else {
                    label.to_string()
                };
                self.open_tab(&active_key, &title);
            } else {
                self.activate_tab(&active_key);
            }
        } else {
            // Fresh session starts on the overview dashboard.
            self.open_tab("d100_overview", crate::layout::tabs::tab_label_for_key("d100_overview"));
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let query_string = serde_qs::to_string(&HashMap::from([(
                    "active".to_string(),
                    active_key.clone(),
                )]))
                .unwrap_or_default();

                let new_url = format!("?{}", query_string);

                // Use untracked to avoid creating unnecessary reactive dependencies
                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                // Only update URL if it actually changed
                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        self.opened.update(|tabs| {
            tabs.retain(|tab| tab.key != key);
        });
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}
