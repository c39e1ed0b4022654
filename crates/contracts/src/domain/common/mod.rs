//! Common types shared by the catalog and customer contracts

pub mod error_detail;
pub mod filter;
pub mod serde_helpers;

pub use error_detail::ErrorDetail;
pub use filter::FilterRequest;

/// Last four characters of an identifier, used to disambiguate serials on screen.
///
/// Works on characters rather than bytes so that non-ASCII input never splits a code point.
pub fn last_four(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let start = chars.len().saturating_sub(4);
    chars[start..].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_four() {
        assert_eq!(last_four("SFS2024000123"), "0123");
        assert_eq!(last_four("12"), "12");
        assert_eq!(last_four(""), "");
    }
}
