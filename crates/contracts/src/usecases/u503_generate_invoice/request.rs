use crate::domain::a001_customer::CustomerRecord;
use serde::{Deserialize, Serialize};

/// Request body for `/generate-invoice`, built from the reviewed customer data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateInvoiceRequest {
    pub customer_name: String,
    pub aadhaar_number: String,
    pub address: String,
    pub mobile_number: String,
}

impl From<&CustomerRecord> for GenerateInvoiceRequest {
    fn from(c: &CustomerRecord) -> Self {
        Self {
            customer_name: c.name.clone(),
            aadhaar_number: c.aadhaar.clone(),
            address: c.address.clone(),
            mobile_number: c.mobile.clone(),
        }
    }
}
