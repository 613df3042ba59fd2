pub mod ui;

use crate::shared::export::CsvExportable;
use crate::shared::list_utils::{Searchable, Sortable};
use contracts::domain::a001_item::InventoryItem;
use std::cmp::Ordering;

impl Searchable for InventoryItem {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
            || self.location.to_lowercase().contains(&needle)
    }
}

impl Sortable for InventoryItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "category" => self.category.cmp(&other.category),
            "quantity" => self.quantity.cmp(&other.quantity),
            // status codes happen to sort in severity order:
            // available < low-stock < out-of-stock
            "status" => self.status.code().cmp(other.status.code()),
            "location" => self.location.cmp(&other.location),
            "value" => self
                .value
                .partial_cmp(&other.value)
                .unwrap_or(Ordering::Equal),
            "updated" => self.last_updated.cmp(&other.last_updated),
            _ => self.name.cmp(&other.name),
        }
    }
}

impl CsvExportable for InventoryItem {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID", "Name", "Category", "Quantity", "Status", "Location", "Last Updated", "Value",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.as_str().to_string(),
            self.name.clone(),
            self.category.clone(),
            self.quantity.to_string(),
            self.status.display_name().to_string(),
            self.location.clone(),
            self.last_updated.to_string(),
            self.value.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::inventory_items;
    use crate::shared::list_utils::{filter_list, sort_list};

    #[test]
    fn test_filter_matches_name_category_and_location() {
        let items = inventory_items().to_vec();
        assert_eq!(filter_list(items.clone(), "dell").len(), 1);
        // category match
        assert_eq!(filter_list(items.clone(), "lab equipment").len(), 4);
        // location match
        assert!(filter_list(items, "biology").iter().any(|i| i.name == "Microscopes"));
    }

    #[test]
    fn test_sort_by_quantity() {
        let mut items = inventory_items().to_vec();
        sort_list(&mut items, "quantity", false);
        assert_eq!(items[0].name, "Library Books");
        sort_list(&mut items, "quantity", true);
        assert_eq!(items[0].name, "Science Lab Kits");
    }

    #[test]
    fn test_status_sorts_by_severity() {
        let mut items = inventory_items().to_vec();
        sort_list(&mut items, "status", false);
        assert_eq!(items[0].name, "Science Lab Kits"); // the only out-of-stock
    }

    #[test]
    fn test_csv_row_shape() {
        let row = inventory_items()[0].to_csv_row();
        assert_eq!(row.len(), InventoryItem::headers().len());
        assert_eq!(row[0], "1");
        assert_eq!(row[1], "Dell Laptops");
        assert_eq!(row[6], "2026-01-05");
    }
}
