/// Utilities for date and time formatting
///
/// Browser clock access goes through `js_sys::Date`; the pure helpers below
/// work on ISO strings so they can be tested on the host.

/// Current instant as an ISO-8601 string (`2024-03-15T14:02:26.123Z`)
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// Today's local date as `YYYY-MM-DD`
pub fn today_ymd() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

/// Format ISO datetime string to DD/MM/YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part
                    .split('.')
                    .next()
                    .unwrap_or(time_part)
                    .trim_end_matches('Z');
                return format!("{}/{}/{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15/03/2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "31/12/2024 23:59:59"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
