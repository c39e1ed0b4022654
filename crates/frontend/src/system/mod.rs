pub mod pages;
pub mod status;
