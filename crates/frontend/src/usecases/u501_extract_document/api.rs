use contracts::domain::a001_customer::{CustomerRecord, CustomerSuggestion};
use contracts::usecases::u501_extract_document::{ExtractionResult, ProcessRequest};

use crate::shared::api_utils::{post_json, ApiError};

/// Run document extraction for one customer folder.
pub async fn process_customer(full_path: &str) -> Result<ExtractionResult, ApiError> {
    let request = ProcessRequest {
        folder_path: full_path.to_string(),
    };
    post_json("/process", &request).await
}

/// Turn the outcome of `/process` into the reviewed record or the message
/// shown on the error card.
pub fn extraction_outcome(
    result: Result<ExtractionResult, ApiError>,
    customer: &CustomerSuggestion,
) -> Result<CustomerRecord, String> {
    match result {
        Ok(result) => result
            .into_record(customer)
            .map_err(|e| format!("Failed to extract information: {}", e)),
        Err(e) => Err(format!("Processing failed: {}", e.message_or("Processing failed"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> CustomerSuggestion {
        CustomerSuggestion {
            folder_name: "012 Mohan Prasad".into(),
            full_path: "/data/012 Mohan Prasad".into(),
            person_name: "Mohan Prasad".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_backend_rejection_message() {
        let result = Ok(ExtractionResult {
            success: false,
            error: Some("No Aadhaar image in folder".into()),
            ..Default::default()
        });
        assert_eq!(
            extraction_outcome(result, &customer()).unwrap_err(),
            "Failed to extract information: No Aadhaar image in folder"
        );
    }

    #[test]
    fn test_http_failure_message() {
        let result = Err(ApiError::Http {
            status: 404,
            detail: Some("Folder not found".into()),
        });
        assert_eq!(
            extraction_outcome(result, &customer()).unwrap_err(),
            "Processing failed: Folder not found"
        );

        let result = Err(ApiError::Http { status: 500, detail: None });
        assert_eq!(
            extraction_outcome(result, &customer()).unwrap_err(),
            "Processing failed: Processing failed"
        );
    }

    #[test]
    fn test_success_uses_folder_name() {
        let result = Ok(ExtractionResult {
            success: true,
            aadhar_number: Some("111122223333".into()),
            address: Some("Bodh Gaya".into()),
            mobile_number: Some("9934012345".into()),
            error: None,
        });
        let record = extraction_outcome(result, &customer()).unwrap();
        assert_eq!(record.name, "Mohan Prasad");
        assert_eq!(record.folder, "012 Mohan Prasad");
    }
}
