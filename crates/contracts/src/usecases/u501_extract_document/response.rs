use crate::domain::a001_customer::{CustomerRecord, CustomerSuggestion};
use serde::{Deserialize, Serialize};

/// Response of `/process`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub success: bool,
    /// Spelled `aadhar` on the wire
    #[serde(default)]
    pub aadhar_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Combine a successful extraction with the picked suggestion.
    ///
    /// The name always comes from the folder, never from the document.
    pub fn into_record(self, customer: &CustomerSuggestion) -> Result<CustomerRecord, String> {
        if !self.success {
            return Err(self.error.unwrap_or_else(|| "Unknown error".to_string()));
        }
        Ok(CustomerRecord {
            name: customer.person_name.clone(),
            aadhaar: self.aadhar_number.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            mobile: self.mobile_number.unwrap_or_default(),
            folder: customer.folder_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> CustomerSuggestion {
        CustomerSuggestion {
            folder_name: "007 Sunita Kumari".into(),
            full_path: "/data/007 Sunita Kumari".into(),
            person_name: "Sunita Kumari".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_success_builds_record() {
        let json = r#"{"success": true, "aadhar_number": "432143214321",
                       "address": "Boring Road, Patna, Bihar", "mobile_number": "9123456780"}"#;
        let r: ExtractionResult = serde_json::from_str(json).unwrap();
        let rec = r.into_record(&customer()).unwrap();
        assert_eq!(rec.name, "Sunita Kumari");
        assert_eq!(rec.folder, "007 Sunita Kumari");
        assert_eq!(rec.mobile, "9123456780");
    }

    #[test]
    fn test_failure_carries_backend_error() {
        let json = r#"{"success": false, "error": "UID file not found"}"#;
        let r: ExtractionResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.into_record(&customer()).unwrap_err(), "UID file not found");
    }
}
