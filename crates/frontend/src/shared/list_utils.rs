/// Shared list helpers (search, sort, match highlighting)
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait for data types that support text filtering
pub trait Searchable {
    /// True when the record matches the search query
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait for data types that support sorting
pub trait Sortable {
    /// Compare two records by the named field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Highlight query matches inside a text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    if !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(
                view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any(),
            );
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(view! {
            <span class="list-highlight">
                {text[actual_pos..match_end].to_string()}
            </span>
        }.into_any());

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Sort a list in place by the named field
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Filter a list by the search query; a blank query keeps everything
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        qty: u32,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.qty.cmp(&other.qty),
                _ => self.name.cmp(other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Projectors", qty: 12 },
            Row { name: "Microscopes", qty: 3 },
            Row { name: "Smartboards", qty: 8 },
        ]
    }

    #[test]
    fn test_blank_filter_keeps_everything() {
        assert_eq!(filter_list(rows(), "").len(), 3);
        assert_eq!(filter_list(rows(), "   ").len(), 3);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let found = filter_list(rows(), "micro");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Microscopes");
        assert_eq!(filter_list(rows(), "SCOPES").len(), 1);
    }

    #[test]
    fn test_sort_by_field_and_direction() {
        let mut items = rows();
        sort_list(&mut items, "qty", true);
        assert_eq!(items[0].qty, 3);
        sort_list(&mut items, "qty", false);
        assert_eq!(items[0].qty, 12);
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].name, "Microscopes");
    }
}
