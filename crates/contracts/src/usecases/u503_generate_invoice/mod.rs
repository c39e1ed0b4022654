pub mod request;
pub mod response;

pub use request::GenerateInvoiceRequest;
pub use response::GenerateInvoiceResponse;
