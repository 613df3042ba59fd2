use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of a building floor (`"floor-1"` ... `"floor-4"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloorId(pub String);

impl FloorId {
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

/// One floor of the school building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,

    pub name: String,

    /// Zero-based building level (ground floor = 0)
    pub level: i32,

    pub description: String,

    #[serde(rename = "roomCount")]
    pub room_count: u32,
}
