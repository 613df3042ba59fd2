//! The fixed inventory dataset: four floors, fourteen rooms, fourteen
//! tracked stock positions plus pre-aggregated category and movement
//! rollups for the dashboards.

use chrono::NaiveDate;
use contracts::domain::a001_item::{InventoryItem, ItemId};
use contracts::domain::a002_floor::{Floor, FloorId};
use contracts::domain::a003_room::{Room, RoomId};
use contracts::enums::ItemStatus;
use once_cell::sync::Lazy;

/// Per-category rollup shown on the reports page.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: &'static str,
    pub count: u32,
    pub value: f64,
}

/// Items moved in and out during one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyMovement {
    pub month: &'static str,
    pub incoming: u32,
    pub outgoing: u32,
}

fn floor(id: &str, name: &str, level: i32, description: &str, room_count: u32) -> Floor {
    Floor {
        id: FloorId::new(id),
        name: name.to_string(),
        level,
        description: description.to_string(),
        room_count,
    }
}

fn room(id: &str, name: &str, floor_id: &str, room_type: &str, capacity: u32, description: &str) -> Room {
    Room {
        id: RoomId::new(id),
        name: name.to_string(),
        floor_id: FloorId::new(floor_id),
        room_type: room_type.to_string(),
        capacity,
        description: description.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    category: &str,
    quantity: u32,
    status: ItemStatus,
    location: &str,
    last_updated: &str,
    value: f64,
    floor_id: &str,
    room_id: &str,
) -> InventoryItem {
    InventoryItem {
        id: ItemId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        status,
        location: location.to_string(),
        last_updated: NaiveDate::parse_from_str(last_updated, "%Y-%m-%d")
            .expect("dataset dates are literal ISO dates"),
        value,
        floor_id: FloorId::new(floor_id),
        room_id: RoomId::new(room_id),
    }
}

static FLOORS: Lazy<Vec<Floor>> = Lazy::new(|| {
    vec![
        floor("floor-1", "Ground Floor", 0, "Main entrance, admin offices, and gymnasium", 8),
        floor("floor-2", "First Floor", 1, "Classrooms and library", 12),
        floor("floor-3", "Second Floor", 2, "Science and computer labs", 10),
        floor("floor-4", "Third Floor", 3, "Art rooms and music studios", 6),
    ]
});

static ROOMS: Lazy<Vec<Room>> = Lazy::new(|| {
    vec![
        // Ground Floor
        room("room-1", "Admin Office", "floor-1", "Office", 10, "Main administrative office"),
        room("room-2", "Gymnasium", "floor-1", "Sports", 200, "Main sports hall"),
        room("room-3", "Storage A", "floor-1", "Storage", 0, "General supplies storage"),
        room("room-4", "AV Room", "floor-1", "Media", 30, "Audio-visual equipment room"),
        // First Floor
        room("room-5", "Classroom 101", "floor-2", "Classroom", 35, "General classroom"),
        room("room-6", "Classroom 102", "floor-2", "Classroom", 35, "General classroom"),
        room("room-7", "Library", "floor-2", "Library", 100, "Main school library"),
        room("room-8", "IT Lab", "floor-2", "Lab", 30, "Computer and IT laboratory"),
        // Second Floor
        room("room-9", "Science Lab", "floor-3", "Lab", 30, "General science laboratory"),
        room("room-10", "Biology Lab", "floor-3", "Lab", 30, "Biology laboratory"),
        room("room-11", "Chemistry Lab", "floor-3", "Lab", 30, "Chemistry laboratory"),
        room("room-12", "Physics Lab", "floor-3", "Lab", 30, "Physics laboratory"),
        // Third Floor
        room("room-13", "Art Room", "floor-4", "Art", 25, "Art and crafts studio"),
        room("room-14", "Music Studio", "floor-4", "Music", 20, "Music practice room"),
    ]
});

static INVENTORY_ITEMS: Lazy<Vec<InventoryItem>> = Lazy::new(|| {
    use ItemStatus::{Available, LowStock, OutOfStock};
    vec![
        item("1", "Dell Laptops", "Electronics", 45, Available, "IT Lab", "2026-01-05", 15000.0, "floor-2", "room-8"),
        item("2", "Projectors", "Electronics", 12, Available, "AV Room", "2026-01-04", 9600.0, "floor-1", "room-4"),
        item("3", "Whiteboard Markers", "Supplies", 8, LowStock, "Storage A", "2026-01-06", 120.0, "floor-1", "room-3"),
        item("4", "Science Lab Kits", "Lab Equipment", 0, OutOfStock, "Science Lab", "2026-01-03", 0.0, "floor-3", "room-9"),
        item("5", "Student Desks", "Furniture", 200, Available, "Classrooms", "2026-01-02", 5000.0, "floor-2", "room-5"),
        item("6", "Library Books", "Books", 1500, Available, "Library", "2026-01-01", 10000.0, "floor-2", "room-7"),
        item("7", "Printer Paper (Reams)", "Supplies", 15, LowStock, "Admin Office", "2026-01-06", 225.0, "floor-1", "room-1"),
        item("8", "Basketball Equipment", "Sports", 25, Available, "Gym", "2026-01-04", 1500.0, "floor-1", "room-2"),
        item("9", "Microscopes", "Lab Equipment", 3, LowStock, "Biology Lab", "2026-01-05", 4000.0, "floor-3", "room-10"),
        item("10", "Art Supplies Kit", "Supplies", 30, Available, "Art Room", "2026-01-03", 1000.0, "floor-4", "room-13"),
        item("11", "Smartboards", "Electronics", 8, Available, "Classrooms", "2026-01-02", 20000.0, "floor-2", "room-6"),
        item("12", "Chemistry Chemicals", "Lab Equipment", 2, LowStock, "Chemistry Lab", "2026-01-06", 800.0, "floor-3", "room-11"),
        item("13", "Musical Instruments", "Music", 15, Available, "Music Studio", "2026-01-05", 8000.0, "floor-4", "room-14"),
        item("14", "Physics Lab Equipment", "Lab Equipment", 10, Available, "Physics Lab", "2026-01-04", 8000.0, "floor-3", "room-12"),
    ]
});

static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category { name: "Electronics", count: 65, value: 78600.0 },
        Category { name: "Furniture", count: 200, value: 30000.0 },
        Category { name: "Supplies", count: 53, value: 1845.0 },
        Category { name: "Lab Equipment", count: 5, value: 5300.0 },
        Category { name: "Books", count: 1500, value: 22500.0 },
        Category { name: "Sports", count: 25, value: 2500.0 },
        Category { name: "Music", count: 15, value: 8500.0 },
    ]
});

static MONTHLY_MOVEMENT: Lazy<Vec<MonthlyMovement>> = Lazy::new(|| {
    vec![
        MonthlyMovement { month: "Aug", incoming: 45, outgoing: 12 },
        MonthlyMovement { month: "Sep", incoming: 32, outgoing: 28 },
        MonthlyMovement { month: "Oct", incoming: 18, outgoing: 35 },
        MonthlyMovement { month: "Nov", incoming: 52, outgoing: 22 },
        MonthlyMovement { month: "Dec", incoming: 28, outgoing: 15 },
        MonthlyMovement { month: "Jan", incoming: 38, outgoing: 20 },
    ]
});

pub fn floors() -> &'static [Floor] {
    &FLOORS
}

pub fn rooms() -> &'static [Room] {
    &ROOMS
}

pub fn inventory_items() -> &'static [InventoryItem] {
    &INVENTORY_ITEMS
}

pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

pub fn monthly_movement() -> &'static [MonthlyMovement] {
    &MONTHLY_MOVEMENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dataset_sizes() {
        assert_eq!(floors().len(), 4);
        assert_eq!(rooms().len(), 14);
        assert_eq!(inventory_items().len(), 14);
        assert_eq!(categories().len(), 7);
        assert_eq!(monthly_movement().len(), 6);
    }

    #[test]
    fn test_ids_are_unique() {
        let item_ids: HashSet<_> = inventory_items().iter().map(|i| &i.id).collect();
        assert_eq!(item_ids.len(), inventory_items().len());
        let room_ids: HashSet<_> = rooms().iter().map(|r| &r.id).collect();
        assert_eq!(room_ids.len(), rooms().len());
    }

    #[test]
    fn test_references_resolve() {
        let floor_ids: HashSet<_> = floors().iter().map(|f| &f.id).collect();
        let room_ids: HashSet<_> = rooms().iter().map(|r| &r.id).collect();
        for room in rooms() {
            assert!(floor_ids.contains(&room.floor_id), "room {:?}", room.id);
        }
        for item in inventory_items() {
            assert!(floor_ids.contains(&item.floor_id), "item {:?}", item.id);
            assert!(room_ids.contains(&item.room_id), "item {:?}", item.id);
        }
    }

    #[test]
    fn test_item_location_matches_its_floor() {
        // Every item's room must sit on the item's floor.
        for item in inventory_items() {
            let room = rooms().iter().find(|r| r.id == item.room_id).unwrap();
            assert_eq!(room.floor_id, item.floor_id, "item {:?}", item.id);
        }
    }
}
