pub mod request;
pub mod response;

pub use request::ProcessRequest;
pub use response::ExtractionResult;
