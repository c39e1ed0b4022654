//! Aadhaar and mobile number normalisation

fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Clean 12-digit Aadhaar number with separators dropped.
///
/// Anything other than exactly 12 digits is not an Aadhaar number.
pub fn clean_aadhaar(raw: &str) -> Option<String> {
    let digits = digits_of(raw);
    (digits.len() == 12).then_some(digits)
}

/// Aadhaar grouped as `XXXX XXXX XXXX`; unrecognised input is returned unchanged
pub fn format_aadhaar(raw: &str) -> String {
    match clean_aadhaar(raw) {
        Some(d) => format!("{} {} {}", &d[0..4], &d[4..8], &d[8..12]),
        None => raw.to_string(),
    }
}

pub fn is_valid_aadhaar(raw: &str) -> bool {
    clean_aadhaar(raw).is_some()
}

/// Indian mobile number as 10 digits, accepting a `+91`/`91`/`0` prefix
pub fn clean_mobile(raw: &str) -> Option<String> {
    let digits = digits_of(raw);
    let local = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('0') => &digits[1..],
        12 if digits.starts_with("91") => &digits[2..],
        _ => return None,
    };
    match local.chars().next() {
        Some('6'..='9') => Some(local.to_string()),
        _ => None,
    }
}

pub fn is_valid_mobile(raw: &str) -> bool {
    clean_mobile(raw).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_aadhaar() {
        assert_eq!(clean_aadhaar("1234 5678 9012").as_deref(), Some("123456789012"));
        assert_eq!(clean_aadhaar("1234-5678-9012").as_deref(), Some("123456789012"));
        assert_eq!(clean_aadhaar("VID 1234567890123456"), None);
        assert_eq!(clean_aadhaar("XXXX XXXX 9012"), None);
    }

    #[test]
    fn test_format_aadhaar() {
        assert_eq!(format_aadhaar("123456789012"), "1234 5678 9012");
        assert_eq!(format_aadhaar("not found"), "not found");
    }

    #[test]
    fn test_format_aadhaar_keeps_overlong_numbers_as_typed() {
        assert_eq!(format_aadhaar("12345678901234"), "12345678901234");
        assert_eq!(format_aadhaar("1234 5678 9012 3456"), "1234 5678 9012 3456");
        assert!(!is_valid_aadhaar("12345678901234"));
    }

    #[test]
    fn test_mobile() {
        assert_eq!(clean_mobile("98765 43210").as_deref(), Some("9876543210"));
        assert_eq!(clean_mobile("+91 98765 43210").as_deref(), Some("9876543210"));
        assert_eq!(clean_mobile("09876543210").as_deref(), Some("9876543210"));
        assert!(!is_valid_mobile("1234567890"));
        assert!(!is_valid_mobile("98765"));
    }

    #[test]
    fn test_valid_aadhaar_requires_exactly_twelve() {
        assert!(is_valid_aadhaar("1234 5678 9012"));
        assert!(!is_valid_aadhaar("12345678901234"));
    }
}
