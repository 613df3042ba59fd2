use chrono::NaiveDate;

/// Format a date for display: `2026-01-05` → `Jan 05, 2026`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 05, 2026");
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_date(date), "Dec 31, 2025");
    }
}
