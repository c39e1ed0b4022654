use contracts::domain::a001_customer::CustomerRecord;
use contracts::usecases::u503_generate_invoice::{GenerateInvoiceRequest, GenerateInvoiceResponse};

use crate::shared::api_utils::{post_json, ApiError};

/// Generate an invoice for the reviewed customer.
pub async fn generate_invoice(customer: &CustomerRecord) -> Result<GenerateInvoiceResponse, ApiError> {
    let request = GenerateInvoiceRequest::from(customer);
    let response: GenerateInvoiceResponse = post_json("/generate-invoice", &request).await?;
    if response.success {
        Ok(response)
    } else {
        Err(ApiError::Rejected(response.error.unwrap_or_default()))
    }
}

/// A finished invoice request is shown only while nothing has reset the
/// workflow since it started and the review card still holds the same customer.
pub fn invoice_still_applies(
    ticket_current: bool,
    requested: &CustomerRecord,
    shown: Option<&CustomerRecord>,
) -> bool {
    ticket_current && shown.is_some_and(|c| c.folder == requested.folder)
}

pub fn invoice_error_message(err: &ApiError) -> String {
    format!(
        "Failed to generate invoice: {}",
        err.message_or("Invoice generation failed")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::debounce::RequestSeq;

    fn record(folder: &str) -> CustomerRecord {
        CustomerRecord {
            name: folder.to_uppercase(),
            aadhaar: "123456789012".into(),
            address: "Ward 4, Siliguri".into(),
            mobile: "9876543210".into(),
            folder: folder.into(),
        }
    }

    #[test]
    fn test_invoice_after_reset_is_dropped() {
        let mut seq = RequestSeq::default();
        let first = record("ravi_kumar");
        let ticket = seq.next();

        // start over, then another customer reaches review
        seq.invalidate();
        let second = record("anita_das");

        assert!(!invoice_still_applies(seq.is_current(ticket), &first, Some(&second)));
        assert!(!invoice_still_applies(seq.is_current(ticket), &first, Some(&first)));
    }

    #[test]
    fn test_invoice_for_customer_on_screen_is_shown() {
        let mut seq = RequestSeq::default();
        let customer = record("ravi_kumar");
        let ticket = seq.next();

        assert!(invoice_still_applies(seq.is_current(ticket), &customer, Some(&customer)));
        assert!(!invoice_still_applies(seq.is_current(ticket), &customer, None));
    }

    #[test]
    fn test_error_message_uses_detail() {
        let err = ApiError::Http {
            status: 400,
            detail: Some("Invoice template missing".into()),
        };
        assert_eq!(
            invoice_error_message(&err),
            "Failed to generate invoice: Invoice template missing"
        );
        assert_eq!(
            invoice_error_message(&ApiError::Rejected(String::new())),
            "Failed to generate invoice: Invoice generation failed"
        );
    }
}
