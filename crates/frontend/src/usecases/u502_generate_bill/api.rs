use contracts::dashboards::d400_business_overview::BillGeneratedNotice;
use contracts::usecases::u502_generate_bill::{
    BillAmountRequest, BillAmountResponse, GenerateBillRequest, GenerateBillResponse,
};
use leptos::task::spawn_local;

use crate::shared::api_utils::{post_ignore_body, post_json, ApiError};

/// GST breakdown for the current pricing.
pub async fn calculate_bill_amount(
    request: &BillAmountRequest,
) -> Result<BillAmountResponse, ApiError> {
    post_json("/calculate-bill-amount", request).await
}

/// Generate the bill document. A 2xx answer with `success: false` is
/// reported as [`ApiError::Rejected`].
pub async fn generate_bill(request: &GenerateBillRequest) -> Result<GenerateBillResponse, ApiError> {
    let response: GenerateBillResponse = post_json("/generate-bill", request).await?;
    check_generated(response)
}

fn check_generated(response: GenerateBillResponse) -> Result<GenerateBillResponse, ApiError> {
    if response.success {
        Ok(response)
    } else {
        Err(ApiError::Rejected(response.error.unwrap_or_default()))
    }
}

/// User-facing reason for a failed bill generation.
pub fn bill_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected(_) => err.message_or("Bill generation failed"),
        _ => err.message_or("Failed to generate bill"),
    }
}

/// Tell the dashboard a bill was issued. Failures are only logged.
pub fn notify_bill_generated(notice: BillGeneratedNotice) {
    spawn_local(async move {
        if let Err(e) = post_ignore_body("/api/dashboard/bill-generated", &notice).await {
            log::warn!("Dashboard notification failed: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsuccessful_response_is_rejected() {
        let response = GenerateBillResponse {
            success: false,
            error: Some("Template not found".into()),
            ..Default::default()
        };
        let err = check_generated(response).unwrap_err();
        assert_eq!(bill_error_message(&err), "Template not found");

        let err = check_generated(GenerateBillResponse::default()).unwrap_err();
        assert_eq!(bill_error_message(&err), "Bill generation failed");
    }

    #[test]
    fn test_http_failure_message() {
        let err = ApiError::Http { status: 500, detail: None };
        assert_eq!(bill_error_message(&err), "Failed to generate bill");
        let err = ApiError::Http {
            status: 400,
            detail: Some("Chassis already billed".into()),
        };
        assert_eq!(bill_error_message(&err), "Chassis already billed");
    }
}
