//! Reductions over the static dataset feeding stat cards, detail pages and
//! the analytics dashboard.

use contracts::domain::a001_item::InventoryItem;
use contracts::domain::a002_floor::{Floor, FloorId};
use contracts::domain::a003_room::{Room, RoomId};
use contracts::enums::ItemStatus;
use contracts::shared::qr_label::seed_hash;

use super::dataset::{floors, inventory_items, rooms};

/// Item counts per stock status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub available: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

/// Aggregate over the items of one room or one floor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemRollup {
    pub item_types: usize,
    pub total_quantity: u32,
    pub total_value: f64,
    pub status: StatusCounts,
}

/// Quantity and position count of one category within an item slice.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub name: String,
    pub quantity: u32,
    pub item_count: usize,
}

pub fn total_quantity() -> u32 {
    inventory_items().iter().map(|i| i.quantity).sum()
}

pub fn total_value() -> f64 {
    inventory_items().iter().map(|i| i.value).sum()
}

/// Positions that are low on stock or gone entirely.
pub fn low_stock_alert_count() -> usize {
    inventory_items().iter().filter(|i| i.needs_attention()).count()
}

pub fn status_counts_of(items: &[InventoryItem]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for item in items {
        match item.status {
            ItemStatus::Available => counts.available += 1,
            ItemStatus::LowStock => counts.low_stock += 1,
            ItemStatus::OutOfStock => counts.out_of_stock += 1,
        }
    }
    counts
}

pub fn status_counts() -> StatusCounts {
    status_counts_of(inventory_items())
}

/// Most recently updated positions, newest first.
pub fn recent_items(n: usize) -> Vec<InventoryItem> {
    let mut items = inventory_items().to_vec();
    items.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
    items.truncate(n);
    items
}

/// Largest positions by quantity.
pub fn top_movers(n: usize) -> Vec<InventoryItem> {
    let mut items = inventory_items().to_vec();
    items.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    items.truncate(n);
    items
}

pub fn floor_by_id(id: &str) -> Option<&'static Floor> {
    floors().iter().find(|f| f.id.as_str() == id)
}

pub fn room_by_id(id: &str) -> Option<&'static Room> {
    rooms().iter().find(|r| r.id.as_str() == id)
}

pub fn rooms_on_floor(floor_id: &FloorId) -> Vec<Room> {
    rooms()
        .iter()
        .filter(|r| &r.floor_id == floor_id)
        .cloned()
        .collect()
}

pub fn items_on_floor(floor_id: &FloorId) -> Vec<InventoryItem> {
    inventory_items()
        .iter()
        .filter(|i| &i.floor_id == floor_id)
        .cloned()
        .collect()
}

pub fn items_in_room(room_id: &RoomId) -> Vec<InventoryItem> {
    inventory_items()
        .iter()
        .filter(|i| &i.room_id == room_id)
        .cloned()
        .collect()
}

pub fn rollup_of(items: &[InventoryItem]) -> ItemRollup {
    ItemRollup {
        item_types: items.len(),
        total_quantity: items.iter().map(|i| i.quantity).sum(),
        total_value: items.iter().map(|i| i.value).sum(),
        status: status_counts_of(items),
    }
}

/// Per-category quantity shares within an item slice, in first-seen order.
pub fn category_shares(items: &[InventoryItem]) -> Vec<CategoryShare> {
    let mut shares: Vec<CategoryShare> = Vec::new();
    for item in items {
        match shares.iter_mut().find(|s| s.name == item.category) {
            Some(share) => {
                share.quantity += item.quantity;
                share.item_count += 1;
            }
            None => shares.push(CategoryShare {
                name: item.category.clone(),
                quantity: item.quantity,
                item_count: 1,
            }),
        }
    }
    shares
}

/// Shelf utilization percentage per category, in the 60..=95 band.
///
/// There is no utilization source in the dataset; the value is derived from
/// the category name through the label hash so the dashboard is stable
/// across reloads.
pub fn category_utilization(name: &str) -> u32 {
    60 + seed_hash(name) % 36
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_floor::FloorId;
    use contracts::domain::a003_room::RoomId;

    #[test]
    fn test_totals() {
        assert_eq!(total_quantity(), 1873);
        assert_eq!(total_value(), 83245.0);
        assert_eq!(low_stock_alert_count(), 5);
    }

    #[test]
    fn test_status_counts() {
        let counts = status_counts();
        assert_eq!(counts.available, 9);
        assert_eq!(counts.low_stock, 4);
        assert_eq!(counts.out_of_stock, 1);
    }

    #[test]
    fn test_recent_items_are_newest_first() {
        let recent = recent_items(5);
        assert_eq!(recent.len(), 5);
        for pair in recent.windows(2) {
            assert!(pair[0].last_updated >= pair[1].last_updated);
        }
    }

    #[test]
    fn test_top_movers() {
        let movers = top_movers(3);
        let names: Vec<_> = movers.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Library Books", "Student Desks", "Dell Laptops"]);
    }

    #[test]
    fn test_room_and_floor_lookups() {
        assert_eq!(floor_by_id("floor-1").unwrap().name, "Ground Floor");
        assert_eq!(room_by_id("room-8").unwrap().name, "IT Lab");
        assert!(floor_by_id("floor-99").is_none());

        let ground = FloorId::new("floor-1");
        assert_eq!(rooms_on_floor(&ground).len(), 4);
        assert_eq!(items_on_floor(&ground).len(), 4);

        let it_lab = items_in_room(&RoomId::new("room-8"));
        assert_eq!(it_lab.len(), 1);
        assert_eq!(it_lab[0].name, "Dell Laptops");
    }

    #[test]
    fn test_rollup() {
        let ground = items_on_floor(&FloorId::new("floor-1"));
        let rollup = rollup_of(&ground);
        assert_eq!(rollup.item_types, 4);
        assert_eq!(rollup.total_quantity, 12 + 8 + 15 + 25);
        assert_eq!(rollup.total_value, 9600.0 + 120.0 + 225.0 + 1500.0);
        assert_eq!(rollup.status.available, 2);
        assert_eq!(rollup.status.low_stock, 2);
    }

    #[test]
    fn test_category_shares_keep_first_seen_order() {
        let shares = category_shares(inventory_items());
        assert_eq!(shares[0].name, "Electronics");
        assert_eq!(shares[0].quantity, 45 + 12 + 8);
        assert_eq!(shares[0].item_count, 3);
        assert_eq!(shares.len(), 7);
    }

    #[test]
    fn test_category_utilization_band() {
        for cat in ["Electronics", "Furniture", "Supplies", "Books"] {
            let u = category_utilization(cat);
            assert!((60..=95).contains(&u), "{cat} → {u}");
        }
        assert_eq!(
            category_utilization("Electronics"),
            category_utilization("Electronics")
        );
    }
}
