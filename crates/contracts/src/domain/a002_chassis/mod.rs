pub mod aggregate;

pub use aggregate::ChassisRecord;
