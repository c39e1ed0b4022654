pub mod d400_business_overview;
