pub mod description;
pub mod hsn;
pub mod request;
pub mod response;
pub mod tax;

pub use description::build_description;
pub use hsn::{HsnOption, HSN_OPTIONS};
pub use request::{BillAmountRequest, GenerateBillRequest, Pricing};
pub use response::{BillAmountResponse, GenerateBillResponse};
pub use tax::{TaxLine, TaxMode};
