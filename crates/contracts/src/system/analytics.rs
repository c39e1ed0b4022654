use serde::{Deserialize, Serialize};

/// Maximum number of analytics events kept in browser storage
pub const ANALYTICS_CAPACITY: usize = 100;

/// A user interaction recorded locally for offline analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub action: String,
    #[serde(default)]
    pub details: serde_json::Value,
    pub timestamp: String,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub url: String,
}

/// Append an event and drop the oldest ones beyond `capacity`
pub fn push_capped(log: &mut Vec<AnalyticsEvent>, event: AnalyticsEvent, capacity: usize) {
    log.push(event);
    if log.len() > capacity {
        let overflow = log.len() - capacity;
        log.drain(..overflow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(n: usize) -> AnalyticsEvent {
        AnalyticsEvent {
            action: format!("a{}", n),
            details: serde_json::Value::Null,
            timestamp: "2024-03-15T10:00:00.000Z".into(),
            user_agent: String::new(),
            url: String::new(),
        }
    }

    #[test]
    fn test_keeps_newest_events() {
        let mut log = Vec::new();
        for n in 0..105 {
            push_capped(&mut log, event(n), ANALYTICS_CAPACITY);
        }
        assert_eq!(log.len(), 100);
        assert_eq!(log[0].action, "a5");
        assert_eq!(log[99].action, "a104");
    }

    #[test]
    fn test_camel_case_storage_format() {
        let json = serde_json::to_value(event(1)).unwrap();
        assert!(json.get("userAgent").is_some());
        let back: AnalyticsEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back.action, "a1");
    }
}
