use contracts::domain::a002_chassis::ChassisRecord;
use contracts::domain::common::FilterRequest;

use crate::shared::api_utils::post_json;

/// Chassis catalog rows matching `text` (empty text lists the catalog head).
/// Failures are logged and yield an empty list.
pub async fn filter_chassis(text: &str) -> Vec<ChassisRecord> {
    match post_json::<_, Vec<ChassisRecord>>("/filter-chassis", &FilterRequest::new(text)).await {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("Chassis filter error: {}", e);
            Vec::new()
        }
    }
}
