use serde::{Deserialize, Serialize};

/// Request body for `/search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub customer_name: String,
}

/// One customer folder matched by `/search`.
///
/// Folders on the backend are named `"<nnn> <Person Name>[_<aadhaar>]"`;
/// `display_text` is ready for the input box (`"Person Name - 123456789012"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSuggestion {
    pub folder_name: String,
    pub full_path: String,
    pub person_name: String,
    #[serde(default)]
    pub aadhaar_number: String,
    #[serde(default)]
    pub display_text: String,
}

impl CustomerSuggestion {
    /// Text shown in the search box once the suggestion is picked
    pub fn input_text(&self) -> String {
        if self.display_text.trim().is_empty() {
            if self.aadhaar_number.is_empty() {
                self.person_name.clone()
            } else {
                format!("{} - {}", self.person_name, self.aadhaar_number)
            }
        } else {
            self.display_text.clone()
        }
    }
}

/// Customer data after extraction, possibly corrected by the operator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub name: String,
    pub aadhaar: String,
    pub address: String,
    pub mobile: String,
    /// Source folder name; read-only during review
    pub folder: String,
}

impl CustomerRecord {
    /// Copy of the record with every editable field trimmed
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            aadhaar: self.aadhaar.trim().to_string(),
            address: self.address.trim().to_string(),
            mobile: self.mobile.trim().to_string(),
            folder: self.folder.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_wire_shape() {
        let json = r#"{
            "folder_name": "001 Nandu Singh_123412341234",
            "full_path": "D:\\minato\\Data\\001 Nandu Singh_123412341234",
            "person_name": "Nandu Singh",
            "aadhaar_number": "123412341234",
            "display_text": "Nandu Singh - 123412341234"
        }"#;
        let s: CustomerSuggestion = serde_json::from_str(json).unwrap();
        assert_eq!(s.person_name, "Nandu Singh");
        assert_eq!(s.input_text(), "Nandu Singh - 123412341234");
    }

    #[test]
    fn test_input_text_without_display_text() {
        let s = CustomerSuggestion {
            person_name: "Asha Devi".into(),
            ..Default::default()
        };
        assert_eq!(s.input_text(), "Asha Devi");

        let s = CustomerSuggestion {
            person_name: "Asha Devi".into(),
            aadhaar_number: "999988887777".into(),
            ..Default::default()
        };
        assert_eq!(s.input_text(), "Asha Devi - 999988887777");
    }

    #[test]
    fn test_trimmed_keeps_folder() {
        let r = CustomerRecord {
            name: "  Ram Lal ".into(),
            aadhaar: " 1234 ".into(),
            address: "Ward 4, Gaya\n".into(),
            mobile: " 9876543210".into(),
            folder: " 014 Ram Lal".into(),
        };
        let t = r.trimmed();
        assert_eq!(t.name, "Ram Lal");
        assert_eq!(t.address, "Ward 4, Gaya");
        assert_eq!(t.folder, " 014 Ram Lal");
    }
}
