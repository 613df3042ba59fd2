//! Tab labels - single source of truth for tab titles.

/// Human-readable tab title for a given key. Fallback: empty string
/// (callers substitute the key itself).
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Dashboards (d1xx) ─────────────────────────────────────────────
        "d100_overview" => "Dashboard",
        "d101_analytics" => "Analytics",

        // ── Projections (p9xx) ────────────────────────────────────────────
        "p900_reports" => "Reports",

        // ── Domain aggregates (a001-a003) ─────────────────────────────────
        "a001_item" => "Items",
        "a002_floor" => "Floors",
        "a003_room" => "Rooms",

        // ── Fallback ──────────────────────────────────────────────────────
        _ => "",
    }
}

/// Title of a detail tab: `<entity> · <identifier>`.
///
/// Example: `detail_tab_label("Floor", "Ground Floor")` → `"Floor · Ground Floor"`
pub fn detail_tab_label(entity_label: &'static str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}
