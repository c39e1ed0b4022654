use crate::domain::common::last_four;
use crate::domain::common::serde_helpers::string_or_number;
use serde::{Deserialize, Serialize};

/// Chassis catalog row returned by `/filter-chassis`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChassisRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub make_model: String,
    #[serde(deserialize_with = "string_or_number")]
    pub chassis_number: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub motor_number: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub controller_number: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub color: String,
    #[serde(default)]
    pub last_four: String,
    #[serde(default)]
    pub display_text: String,
}

impl ChassisRecord {
    pub fn last_four(&self) -> String {
        if self.last_four.is_empty() {
            last_four(&self.chassis_number)
        } else {
            self.last_four.clone()
        }
    }

    /// Text put back into the filter box after selection
    pub fn input_text(&self) -> String {
        if self.display_text.is_empty() {
            format!("{} - {}", self.make_model, self.chassis_number)
        } else {
            self.display_text.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_spreadsheet_row() {
        let json = r#"{
            "make_model": "Yatri Super",
            "chassis_number": "MA1YS2024E0001234",
            "motor_number": 240311,
            "controller_number": "C-7781",
            "color": "Green",
            "last_four": "1234",
            "display_text": "Yatri Super - MA1YS2024E0001234"
        }"#;
        let c: ChassisRecord = serde_json::from_str(json).unwrap();
        assert_eq!(c.motor_number, "240311");
        assert_eq!(c.last_four(), "1234");
    }

    #[test]
    fn test_fallbacks_when_backend_omits_helpers() {
        let c = ChassisRecord {
            make_model: "Mayuri Pro".into(),
            chassis_number: "MP99887".into(),
            ..Default::default()
        };
        assert_eq!(c.last_four(), "9887");
        assert_eq!(c.input_text(), "Mayuri Pro - MP99887");
    }
}
