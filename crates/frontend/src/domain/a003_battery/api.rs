use contracts::domain::a003_battery::BatteryRecord;
use contracts::domain::common::FilterRequest;

use crate::shared::api_utils::post_json;

/// Battery catalog rows matching `text`. Failures are logged and yield an empty list.
pub async fn filter_batteries(text: &str) -> Vec<BatteryRecord> {
    match post_json::<_, Vec<BatteryRecord>>("/filter-batteries", &FilterRequest::new(text)).await
    {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("Battery filter error: {}", e);
            Vec::new()
        }
    }
}
