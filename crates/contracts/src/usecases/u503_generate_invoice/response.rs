use serde::{Deserialize, Serialize};

/// Response of `/generate-invoice`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateInvoiceResponse {
    pub success: bool,
    #[serde(default)]
    pub invoice_path: Option<String>,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
