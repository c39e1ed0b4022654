pub mod a001_customer;
pub mod a002_chassis;
pub mod a003_battery;
