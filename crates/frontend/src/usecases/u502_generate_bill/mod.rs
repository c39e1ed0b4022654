pub mod api;
pub mod pricing;
pub mod results;
pub mod selection;
pub mod tax_view;
pub mod view;
pub mod view_model;

pub use results::{BillResults, BillSummary};
pub use view::BillingForm;
pub use view_model::BillingViewModel;
