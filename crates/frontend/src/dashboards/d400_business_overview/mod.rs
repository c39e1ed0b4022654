pub mod api;
pub mod fallback;
pub mod model;
pub mod ui;
