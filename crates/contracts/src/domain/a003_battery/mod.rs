pub mod aggregate;

pub use aggregate::BatteryRecord;
