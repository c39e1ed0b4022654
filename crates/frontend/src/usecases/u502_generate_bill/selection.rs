//! Chassis and battery picked for the bill.

use contracts::domain::a002_chassis::ChassisRecord;
use contracts::domain::a003_battery::BatteryRecord;
use contracts::usecases::u502_generate_bill::build_description;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Battery already selected!")]
    DuplicateBattery(String),
}

/// At most one chassis and any number of batteries with distinct serials.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSelection {
    pub chassis: Option<ChassisRecord>,
    pub batteries: Vec<BatteryRecord>,
}

impl ItemSelection {
    /// Replaces any previously selected chassis.
    pub fn set_chassis(&mut self, chassis: ChassisRecord) {
        self.chassis = Some(chassis);
    }

    pub fn clear_chassis(&mut self) {
        self.chassis = None;
    }

    pub fn add_battery(&mut self, battery: BatteryRecord) -> Result<(), SelectionError> {
        if self
            .batteries
            .iter()
            .any(|b| b.bat_serial_number == battery.bat_serial_number)
        {
            return Err(SelectionError::DuplicateBattery(battery.bat_serial_number));
        }
        self.batteries.push(battery);
        Ok(())
    }

    pub fn remove_battery(&mut self, serial: &str) {
        self.batteries.retain(|b| b.bat_serial_number != serial);
    }

    pub fn clear_batteries(&mut self) {
        self.batteries.clear();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_items(&self) -> bool {
        self.chassis.is_some() || !self.batteries.is_empty()
    }

    pub fn description(&self) -> Option<String> {
        build_description(self.chassis.as_ref(), &self.batteries)
    }

    /// Bill can be generated: an HSN code and at least one item.
    pub fn is_ready(&self, hsn_code: &str) -> bool {
        !hsn_code.trim().is_empty() && self.has_items()
    }

    pub fn battery_serials(&self) -> Vec<String> {
        self.batteries
            .iter()
            .map(|b| b.bat_serial_number.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn battery(serial: &str) -> BatteryRecord {
        BatteryRecord {
            make: "SF Sonic".into(),
            model: "FS1080".into(),
            bat_serial_number: serial.into(),
            ampere: "120".into(),
            ..Default::default()
        }
    }

    fn chassis(number: &str) -> ChassisRecord {
        ChassisRecord {
            make_model: "Yatri Super".into(),
            chassis_number: number.into(),
            motor_number: "M77".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_duplicate_serial_is_rejected() {
        let mut sel = ItemSelection::default();
        sel.add_battery(battery("SFS0001")).unwrap();
        let err = sel.add_battery(battery("SFS0001")).unwrap_err();
        assert_eq!(err.to_string(), "Battery already selected!");
        assert_eq!(sel.batteries.len(), 1);
        sel.add_battery(battery("SFS0002")).unwrap();
        assert_eq!(sel.battery_serials(), vec!["SFS0001", "SFS0002"]);
    }

    #[test]
    fn test_single_chassis_is_replaced() {
        let mut sel = ItemSelection::default();
        sel.set_chassis(chassis("C1"));
        sel.set_chassis(chassis("C2"));
        assert_eq!(sel.chassis.as_ref().map(|c| c.chassis_number.as_str()), Some("C2"));
        sel.clear_chassis();
        assert!(!sel.has_items());
    }

    #[test]
    fn test_readiness_needs_hsn_and_item() {
        let mut sel = ItemSelection::default();
        assert!(!sel.is_ready("87038040"));
        sel.add_battery(battery("B1")).unwrap();
        assert!(!sel.is_ready(""));
        assert!(!sel.is_ready("  "));
        assert!(sel.is_ready("87038040"));
        sel.remove_battery("B1");
        assert!(!sel.is_ready("87038040"));
    }

    #[test]
    fn test_description_tracks_selection() {
        let mut sel = ItemSelection::default();
        assert_eq!(sel.description(), None);
        sel.add_battery(battery("SFS12345678")).unwrap();
        sel.add_battery(battery("SFS87654321")).unwrap();
        sel.clear_batteries();
        assert_eq!(sel.description(), None);
        sel.set_chassis(chassis("MEL123"));
        assert!(sel.description().unwrap().starts_with("E-RICKSHAW YATRI SUPER CHASSIS NO-MEL123"));
        sel.clear();
        assert_eq!(sel, ItemSelection::default());
    }
}
