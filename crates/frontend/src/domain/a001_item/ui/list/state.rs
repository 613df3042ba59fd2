use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ItemListState {
    // filters
    pub q: String,
    /// Category name or "all"
    pub category: String,
    /// Status code or "all"
    pub status: String,
}

impl Default for ItemListState {
    fn default() -> Self {
        Self {
            q: String::new(),
            category: "all".to_string(),
            status: "all".to_string(),
        }
    }
}

pub fn create_state() -> RwSignal<ItemListState> {
    RwSignal::new(ItemListState::default())
}
