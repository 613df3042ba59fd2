use base64::{engine::general_purpose, Engine as _};

use crate::domain::a001_item::InventoryItem;

/// PNG bytes as a `data:` URI, usable in `img src` and anchor downloads.
pub fn png_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", general_purpose::STANDARD.encode(png))
}

/// Standalone HTML document for printing one asset label.
///
/// Embeds the rendered PNG as a data URI with the item's name, identifier
/// and location as plain text. The document prints itself on load, so the
/// caller only has to open it in a window.
pub fn print_document(item: &InventoryItem, png: &[u8]) -> String {
    format!(
        r#"<html>
  <head><title>Asset QR Code - {name}</title></head>
  <body style="display:flex;flex-direction:column;align-items:center;justify-content:center;min-height:100vh;font-family:system-ui;">
    <h2>{name}</h2>
    <img src="{src}" style="width:200px;height:200px;" />
    <p>ID: {id} | Location: {location}</p>
    <script>window.addEventListener('load', () => window.print());</script>
  </body>
</html>
"#,
        name = item.name,
        src = png_data_uri(png),
        id = item.id.as_str(),
        location = item.location,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_item::ItemId;
    use crate::domain::a002_floor::FloorId;
    use crate::domain::a003_room::RoomId;
    use crate::enums::ItemStatus;
    use chrono::NaiveDate;

    #[test]
    fn test_document_embeds_image_and_identity() {
        let item = InventoryItem {
            id: ItemId::new("9"),
            name: "Microscopes".to_string(),
            category: "Lab Equipment".to_string(),
            quantity: 3,
            status: ItemStatus::LowStock,
            location: "Biology Lab".to_string(),
            last_updated: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            value: 4000.0,
            floor_id: FloorId::new("floor-3"),
            room_id: RoomId::new("room-10"),
        };
        let doc = print_document(&item, b"fake-png");
        assert!(doc.contains("data:image/png;base64,"));
        assert!(doc.contains("<h2>Microscopes</h2>"));
        assert!(doc.contains("ID: 9 | Location: Biology Lab"));
    }

    #[test]
    fn test_data_uri_prefix() {
        assert!(png_data_uri(&[1, 2, 3]).starts_with("data:image/png;base64,"));
    }
}
