pub mod analytics;
pub mod data_status;
