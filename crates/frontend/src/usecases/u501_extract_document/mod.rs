pub mod api;
pub mod progress;
pub mod view;
pub mod view_model;

pub use view::{ExtractionProgress, ReviewCard};
pub use view_model::ReviewViewModel;
