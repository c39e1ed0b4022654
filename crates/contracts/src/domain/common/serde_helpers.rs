//! Lenient deserializers for catalog columns.
//!
//! The catalogs are spreadsheets on the backend side, so a column such as
//! `ampere` arrives as `100`, `100.0` or `"100"` depending on how the cell was typed.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

/// Accept a string, number or bool and keep it as display text. `null` becomes empty.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Loose> = Option::deserialize(deserializer)?;
    Ok(match value {
        None => String::new(),
        Some(Loose::Text(s)) => s,
        Some(Loose::Int(n)) => n.to_string(),
        Some(Loose::UInt(n)) => n.to_string(),
        Some(Loose::Float(f)) if f.fract() == 0.0 => format!("{}", f as i64),
        Some(Loose::Float(f)) => f.to_string(),
        Some(Loose::Bool(b)) => b.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "string_or_number")]
        value: String,
    }

    fn parse(json: &str) -> String {
        serde_json::from_str::<Row>(json).unwrap().value
    }

    #[test]
    fn test_accepts_text_and_numbers() {
        assert_eq!(parse(r#"{"value": "120"}"#), "120");
        assert_eq!(parse(r#"{"value": 120}"#), "120");
        assert_eq!(parse(r#"{"value": 120.0}"#), "120");
        assert_eq!(parse(r#"{"value": 7.5}"#), "7.5");
    }

    #[test]
    fn test_serials_above_i64_range_stay_exact() {
        assert_eq!(parse(r#"{"value": 18000000000000000000}"#), "18000000000000000000");
        assert_eq!(parse(r#"{"value": -42}"#), "-42");
    }

    #[test]
    fn test_null_and_missing_are_empty() {
        assert_eq!(parse(r#"{"value": null}"#), "");
        assert_eq!(parse(r#"{}"#), "");
    }
}
