//! Line-item description printed on the bill

use crate::domain::a002_chassis::ChassisRecord;
use crate::domain::a003_battery::BatteryRecord;
use crate::domain::common::last_four;

/// Build the bill description for the current selection.
///
/// Returns `None` when neither a chassis nor any battery is selected.
/// Battery suffixes are the last four characters of the serial itself,
/// regardless of what the catalog put in `last_four`.
pub fn build_description(
    chassis: Option<&ChassisRecord>,
    batteries: &[BatteryRecord],
) -> Option<String> {
    let mut description = String::new();

    if let Some(c) = chassis {
        description.push_str(&format!("E-RICKSHAW {} ", c.make_model.to_uppercase()));
        description.push_str(&format!("CHASSIS NO-{} ", c.chassis_number));
        description.push_str(&format!("MOTOR NO-{}", c.motor_number));
    }

    if !batteries.is_empty() {
        if !description.is_empty() {
            description.push(' ');
        }
        description.push_str("WITH SF SONIC 12 MONTHS BATTERY ");
        for (index, battery) in batteries.iter().enumerate() {
            let serial = &battery.bat_serial_number;
            description.push_str(&format!("{}){} {} ", index + 1, serial, last_four(serial)));
        }
    }

    let description = description.trim().to_string();
    if description.is_empty() {
        None
    } else {
        Some(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chassis() -> ChassisRecord {
        ChassisRecord {
            make_model: "Yatri Super".into(),
            chassis_number: "MA1YS0001234".into(),
            motor_number: "MTR5566".into(),
            ..Default::default()
        }
    }

    fn battery(serial: &str) -> BatteryRecord {
        BatteryRecord {
            make: "SF Sonic".into(),
            model: "FS1440".into(),
            bat_serial_number: serial.into(),
            ampere: "140".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_nothing_selected() {
        assert_eq!(build_description(None, &[]), None);
    }

    #[test]
    fn test_chassis_only() {
        assert_eq!(
            build_description(Some(&chassis()), &[]).unwrap(),
            "E-RICKSHAW YATRI SUPER CHASSIS NO-MA1YS0001234 MOTOR NO-MTR5566"
        );
    }

    #[test]
    fn test_chassis_and_batteries() {
        let batteries = vec![battery("SFS24A00981"), battery("SFS24A01007")];
        assert_eq!(
            build_description(Some(&chassis()), &batteries).unwrap(),
            "E-RICKSHAW YATRI SUPER CHASSIS NO-MA1YS0001234 MOTOR NO-MTR5566 \
             WITH SF SONIC 12 MONTHS BATTERY 1)SFS24A00981 0981 2)SFS24A01007 1007"
        );
    }

    #[test]
    fn test_batteries_only_has_no_leading_space() {
        let text = build_description(None, &[battery("B1")]).unwrap();
        assert_eq!(text, "WITH SF SONIC 12 MONTHS BATTERY 1)B1 B1");
    }
}
