//! Global search over pages, floors, rooms and inventory items.
//!
//! A case-insensitive substring scan producing one ranked result list:
//! pages first, then floors (max 3), rooms (max 3) and items (max 5).

use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::data::{floors, inventory_items, rooms};

const MAX_FLOOR_RESULTS: usize = 3;
const MAX_ROOM_RESULTS: usize = 3;
const MAX_ITEM_RESULTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Page,
    Floor,
    Room,
    Item,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub kind: SearchKind,
    pub title: String,
    pub subtitle: String,
    pub icon: &'static str,
    /// Tab opened when the result is picked.
    pub tab_key: String,
    pub tab_title: String,
    /// For item results: text filter handed to the items list.
    pub item_filter: Option<String>,
}

/// All navigable pages, in sidebar order.
fn pages() -> [(&'static str, &'static str); 6] {
    [
        ("d100_overview", "layout-dashboard"),
        ("a001_item", "package"),
        ("a002_floor", "building"),
        ("a003_room", "door-open"),
        ("p900_reports", "file-text"),
        ("d101_analytics", "bar-chart"),
    ]
}

/// Run the search. An empty query yields no results.
pub fn search_all(query: &str) -> Vec<SearchResult> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    let mut results: Vec<SearchResult> = Vec::new();

    for (key, icon) in pages() {
        let title = tab_label_for_key(key);
        if contains(title) {
            results.push(SearchResult {
                kind: SearchKind::Page,
                title: title.to_string(),
                subtitle: "Page".to_string(),
                icon,
                tab_key: key.to_string(),
                tab_title: title.to_string(),
                item_filter: None,
            });
        }
    }

    results.extend(
        floors()
            .iter()
            .filter(|f| contains(&f.name) || contains(&f.description))
            .take(MAX_FLOOR_RESULTS)
            .map(|f| SearchResult {
                kind: SearchKind::Floor,
                title: f.name.clone(),
                subtitle: f.description.clone(),
                icon: "building",
                tab_key: format!("a002_floor_detail_{}", f.id.as_str()),
                tab_title: detail_tab_label("Floor", &f.name),
                item_filter: None,
            }),
    );

    results.extend(
        rooms()
            .iter()
            .filter(|r| contains(&r.name) || contains(&r.room_type) || contains(&r.description))
            .take(MAX_ROOM_RESULTS)
            .map(|r| {
                let floor_name = floors()
                    .iter()
                    .find(|f| f.id == r.floor_id)
                    .map(|f| f.name.clone())
                    .unwrap_or_default();
                SearchResult {
                    kind: SearchKind::Room,
                    title: r.name.clone(),
                    subtitle: format!("{} • {}", r.room_type, floor_name),
                    icon: "door-open",
                    tab_key: format!("a003_room_detail_{}", r.id.as_str()),
                    tab_title: detail_tab_label("Room", &r.name),
                    item_filter: None,
                }
            }),
    );

    results.extend(
        inventory_items()
            .iter()
            .filter(|i| contains(&i.name) || contains(&i.category) || contains(&i.location))
            .take(MAX_ITEM_RESULTS)
            .map(|i| SearchResult {
                kind: SearchKind::Item,
                title: i.name.clone(),
                subtitle: format!("{} • {}", i.category, i.location),
                icon: "package",
                tab_key: "a001_item".to_string(),
                tab_title: tab_label_for_key("a001_item").to_string(),
                item_filter: Some(i.name.clone()),
            }),
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_yields_nothing() {
        assert!(search_all("").is_empty());
        assert!(search_all("   ").is_empty());
    }

    #[test]
    fn test_group_order_pages_floors_rooms_items() {
        // "lab" hits rooms (IT Lab, labs...) and items (Lab Equipment, lab locations)
        let results = search_all("lab");
        let first_room = results.iter().position(|r| r.kind == SearchKind::Room);
        let first_item = results.iter().position(|r| r.kind == SearchKind::Item);
        assert!(first_room.unwrap() < first_item.unwrap());
    }

    #[test]
    fn test_room_results_are_capped() {
        // Five rooms are labs; only three room results may come back.
        let rooms_found = search_all("lab")
            .into_iter()
            .filter(|r| r.kind == SearchKind::Room)
            .count();
        assert_eq!(rooms_found, MAX_ROOM_RESULTS);
    }

    #[test]
    fn test_item_results_are_capped() {
        // "a" matches nearly every item name/category/location.
        let items_found = search_all("a")
            .into_iter()
            .filter(|r| r.kind == SearchKind::Item)
            .count();
        assert_eq!(items_found, MAX_ITEM_RESULTS);
    }

    #[test]
    fn test_page_match() {
        let results = search_all("repo");
        assert!(results
            .iter()
            .any(|r| r.kind == SearchKind::Page && r.tab_key == "p900_reports"));
    }

    #[test]
    fn test_item_result_carries_list_filter() {
        let results = search_all("microsc");
        let item = results
            .iter()
            .find(|r| r.kind == SearchKind::Item)
            .expect("should match Microscopes");
        assert_eq!(item.tab_key, "a001_item");
        assert_eq!(item.item_filter.as_deref(), Some("Microscopes"));
    }

    #[test]
    fn test_floor_match_by_description() {
        let results = search_all("gymnasium");
        assert!(results
            .iter()
            .any(|r| r.kind == SearchKind::Floor && r.title == "Ground Floor"));
    }
}
