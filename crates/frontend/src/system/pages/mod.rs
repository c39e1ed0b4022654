pub mod inventory;
pub mod settings;
