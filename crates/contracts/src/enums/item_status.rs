use serde::{Deserialize, Serialize};

/// Stock level of an inventory position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    Available,
    LowStock,
    OutOfStock,
}

impl ItemStatus {
    /// Wire code of the status
    pub fn code(&self) -> &'static str {
        match self {
            ItemStatus::Available => "available",
            ItemStatus::LowStock => "low-stock",
            ItemStatus::OutOfStock => "out-of-stock",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemStatus::Available => "Available",
            ItemStatus::LowStock => "Low Stock",
            ItemStatus::OutOfStock => "Out of Stock",
        }
    }

    /// All statuses, in display order
    pub fn all() -> Vec<ItemStatus> {
        vec![
            ItemStatus::Available,
            ItemStatus::LowStock,
            ItemStatus::OutOfStock,
        ]
    }

    /// Parse from the wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "available" => Some(ItemStatus::Available),
            "low-stock" => Some(ItemStatus::LowStock),
            "out-of-stock" => Some(ItemStatus::OutOfStock),
            _ => None,
        }
    }
}

impl ToString for ItemStatus {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
