use serde::{Deserialize, Serialize};

/// Response of `/data-status`: whether the backend loaded its catalog spreadsheets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStatus {
    #[serde(default)]
    pub chassis_loaded: bool,
    #[serde(default)]
    pub battery_loaded: bool,
    #[serde(default)]
    pub chassis_count: Option<u64>,
    #[serde(default)]
    pub battery_count: Option<u64>,
}

impl DataStatus {
    pub fn all_loaded(&self) -> bool {
        self.chassis_loaded && self.battery_loaded
    }
}
