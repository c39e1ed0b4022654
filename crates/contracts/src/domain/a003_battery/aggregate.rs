use crate::domain::common::last_four;
use crate::domain::common::serde_helpers::string_or_number;
use serde::{Deserialize, Serialize};

/// Battery catalog row returned by `/filter-batteries`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub make: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub model: String,
    #[serde(deserialize_with = "string_or_number")]
    pub bat_serial_number: String,
    /// Ampere-hour rating
    #[serde(default, deserialize_with = "string_or_number")]
    pub ampere: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub warranty: String,
    #[serde(default)]
    pub last_four: String,
    #[serde(default)]
    pub display_text: String,
}

impl BatteryRecord {
    pub fn title(&self) -> String {
        format!("{} {}", self.make, self.model).trim().to_string()
    }

    pub fn last_four(&self) -> String {
        if self.last_four.is_empty() {
            last_four(&self.bat_serial_number)
        } else {
            self.last_four.clone()
        }
    }

    /// `"<make> <model> - <ampere>Ah"` line used in the selection list
    pub fn rating_line(&self) -> String {
        format!("{} - {}Ah", self.title(), self.ampere)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ampere_and_warranty() {
        let json = r#"{
            "make": "SF Sonic",
            "model": "FS1440",
            "bat_serial_number": "SFS24A00981",
            "ampere": 140,
            "warranty": 12
        }"#;
        let b: BatteryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(b.ampere, "140");
        assert_eq!(b.warranty, "12");
        assert_eq!(b.last_four(), "0981");
        assert_eq!(b.rating_line(), "SF Sonic FS1440 - 140Ah");
    }
}
