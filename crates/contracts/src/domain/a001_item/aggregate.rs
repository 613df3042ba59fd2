use crate::domain::a002_floor::FloorId;
use crate::domain::a003_room::RoomId;
use crate::enums::ItemStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of an inventory position.
///
/// Identifiers are short human-readable strings (`"1"`, `"2"`, ...) that end
/// up verbatim on printed asset labels, so they are not UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// One tracked stock position: a named article kept at a known location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,

    pub name: String,

    pub category: String,

    pub quantity: u32,

    pub status: ItemStatus,

    pub location: String,

    #[serde(rename = "lastUpdated")]
    pub last_updated: NaiveDate,

    /// Replacement value of the whole position, in whole currency units
    pub value: f64,

    #[serde(rename = "floorId")]
    pub floor_id: FloorId,

    #[serde(rename = "roomId")]
    pub room_id: RoomId,
}

impl InventoryItem {
    /// True when the position needs restocking attention
    pub fn needs_attention(&self) -> bool {
        matches!(self.status, ItemStatus::LowStock | ItemStatus::OutOfStock)
    }
}
