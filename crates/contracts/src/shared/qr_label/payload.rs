use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::domain::a001_item::InventoryItem;
use crate::enums::ItemStatus;

use super::LabelError;

/// Wire record encoded into the label pattern.
///
/// Field order is part of the contract: the seed hash runs over the encoded
/// string, so reordering, renaming or reformatting any field changes every
/// label already in circulation.
#[derive(Debug, Clone, Serialize)]
pub struct LabelPayload {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub status: ItemStatus,
    pub location: String,
    #[serde(serialize_with = "plain_number")]
    pub value: f64,
    #[serde(rename = "lastUpdated")]
    pub last_updated: NaiveDate,
}

impl LabelPayload {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            id: item.id.as_str().to_string(),
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
            status: item.status,
            location: item.location.clone(),
            value: item.value,
            last_updated: item.last_updated,
        }
    }

    /// Compact JSON with declaration-order fields.
    pub fn encode(&self) -> Result<String, LabelError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Integral values serialize as integers (`15000`, not `15000.0`) so the
/// encoded payload stays byte-identical across serializers.
fn plain_number<S: Serializer>(value: &f64, ser: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        ser.serialize_i64(*value as i64)
    } else {
        ser.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_item::ItemId;
    use crate::domain::a002_floor::FloorId;
    use crate::domain::a003_room::RoomId;
    use crate::shared::qr_label::seed_hash;

    fn laptops() -> InventoryItem {
        InventoryItem {
            id: ItemId::new("1"),
            name: "Dell Laptops".to_string(),
            category: "Electronics".to_string(),
            quantity: 45,
            status: ItemStatus::Available,
            location: "IT Lab".to_string(),
            last_updated: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            value: 15000.0,
            floor_id: FloorId::new("floor-2"),
            room_id: RoomId::new("room-8"),
        }
    }

    #[test]
    fn test_encoding_is_stable() {
        let encoded = LabelPayload::from_item(&laptops()).encode().unwrap();
        assert_eq!(
            encoded,
            r#"{"id":"1","name":"Dell Laptops","category":"Electronics","quantity":45,"status":"available","location":"IT Lab","value":15000,"lastUpdated":"2026-01-05"}"#
        );
    }

    #[test]
    fn test_encoded_payload_seeds_reference_hash() {
        let encoded = LabelPayload::from_item(&laptops()).encode().unwrap();
        assert_eq!(seed_hash(&encoded), 1_872_933_528);
    }

    #[test]
    fn test_fractional_value_keeps_fraction() {
        let mut item = laptops();
        item.value = 225.5;
        let encoded = LabelPayload::from_item(&item).encode().unwrap();
        assert!(encoded.contains(r#""value":225.5"#));
    }

    #[test]
    fn test_status_wire_codes() {
        for (status, code) in [
            (ItemStatus::Available, r#""status":"available""#),
            (ItemStatus::LowStock, r#""status":"low-stock""#),
            (ItemStatus::OutOfStock, r#""status":"out-of-stock""#),
        ] {
            let mut item = laptops();
            item.status = status;
            let encoded = LabelPayload::from_item(&item).encode().unwrap();
            assert!(encoded.contains(code), "missing {code} in {encoded}");
        }
    }
}
