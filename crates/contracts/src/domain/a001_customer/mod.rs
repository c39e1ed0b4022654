pub mod aggregate;
pub mod identity;

pub use aggregate::{CustomerRecord, CustomerSuggestion, SearchRequest};
