use super::tax::TaxMode;
use crate::domain::a001_customer::CustomerRecord;
use crate::domain::a002_chassis::ChassisRecord;
use crate::domain::a003_battery::BatteryRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for `/calculate-bill-amount`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillAmountRequest {
    pub hsn_code: String,
    pub unit_price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub discount: f64,
    pub is_interstate: bool,
}

/// Request body for `/generate-bill`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateBillRequest {
    pub customer_name: String,
    pub aadhaar_number: String,
    pub address: String,
    pub mobile_number: String,
    pub chassis_number: Option<String>,
    pub selected_batteries: Vec<String>,
    pub hsn_code: String,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub is_interstate: bool,
    #[serde(default)]
    pub bill_date: Option<NaiveDate>,
    pub additional_notes: Option<String>,
}

/// Pricing part of the billing form
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pricing {
    pub unit_price: Option<f64>,
    pub quantity: Option<u32>,
    pub discount: Option<f64>,
    pub tax_mode: TaxMode,
}

impl GenerateBillRequest {
    pub fn new(
        customer: &CustomerRecord,
        chassis: Option<&ChassisRecord>,
        batteries: &[BatteryRecord],
        hsn_code: &str,
        pricing: Pricing,
        bill_date: Option<NaiveDate>,
        notes: Option<String>,
    ) -> Self {
        Self {
            customer_name: customer.name.clone(),
            aadhaar_number: customer.aadhaar.clone(),
            address: customer.address.clone(),
            mobile_number: customer.mobile.clone(),
            chassis_number: chassis.map(|c| c.chassis_number.clone()),
            selected_batteries: batteries
                .iter()
                .map(|b| b.bat_serial_number.clone())
                .collect(),
            hsn_code: hsn_code.to_string(),
            unit_price: pricing.unit_price,
            quantity: pricing.quantity,
            discount: pricing.discount,
            is_interstate: pricing.tax_mode.is_interstate(),
            bill_date,
            additional_notes: notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_request_wire_shape() {
        let customer = CustomerRecord {
            name: "Ram Lal".into(),
            aadhaar: "123412341234".into(),
            address: "Gaya".into(),
            mobile: "9876543210".into(),
            folder: "014 Ram Lal".into(),
        };
        let battery = BatteryRecord {
            bat_serial_number: "SFS1".into(),
            ..Default::default()
        };
        let req = GenerateBillRequest::new(
            &customer,
            None,
            &[battery],
            "85076000",
            Pricing {
                unit_price: Some(42000.0),
                quantity: Some(1),
                discount: None,
                tax_mode: TaxMode::InterState,
            },
            NaiveDate::from_ymd_opt(2024, 3, 15),
            Some("   ".into()),
        );
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["customer_name"], "Ram Lal");
        assert_eq!(v["chassis_number"], serde_json::Value::Null);
        assert_eq!(v["selected_batteries"][0], "SFS1");
        assert_eq!(v["is_interstate"], true);
        assert_eq!(v["bill_date"], "2024-03-15");
        assert_eq!(v["additional_notes"], serde_json::Value::Null);
    }
}
