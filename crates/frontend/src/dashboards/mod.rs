pub mod d400_business_overview;

pub use d400_business_overview::ui::BusinessOverviewDashboard;
