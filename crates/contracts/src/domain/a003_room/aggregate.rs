use crate::domain::a002_floor::FloorId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of a room (`"room-1"` ... `"room-14"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub String);

impl RoomId {
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

/// One room, always attached to a floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,

    pub name: String,

    #[serde(rename = "floorId")]
    pub floor_id: FloorId,

    /// Free-form room kind: Classroom, Lab, Office, Storage, ...
    #[serde(rename = "type")]
    pub room_type: String,

    /// Seating capacity; 0 for storage-only rooms
    pub capacity: u32,

    pub description: String,
}
