//! Client-side interaction log kept in `localStorage["analytics"]`.

use contracts::system::analytics::{push_capped, AnalyticsEvent, ANALYTICS_CAPACITY};

use crate::shared::date_utils::now_iso;
use crate::shared::storage;

const ANALYTICS_KEY: &str = "analytics";

pub fn load_events() -> Vec<AnalyticsEvent> {
    storage::get(ANALYTICS_KEY)
        .and_then(|raw| match serde_json::from_str(&raw) {
            Ok(events) => Some(events),
            Err(e) => {
                log::warn!("Discarding unreadable analytics log: {}", e);
                None
            }
        })
        .unwrap_or_default()
}

/// Record an interaction; never fails the caller.
pub fn track(action: &str, details: serde_json::Value) {
    let (user_agent, url) = match web_sys::window() {
        Some(w) => (
            w.navigator().user_agent().unwrap_or_default(),
            w.location().href().unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };

    let event = AnalyticsEvent {
        action: action.to_string(),
        details,
        timestamp: now_iso(),
        user_agent,
        url,
    };
    log::debug!("track: {}", event.action);

    let mut events = load_events();
    push_capped(&mut events, event, ANALYTICS_CAPACITY);
    match serde_json::to_string(&events) {
        Ok(raw) => storage::set(ANALYTICS_KEY, &raw),
        Err(e) => log::error!("Failed to serialize analytics log: {}", e),
    }
}

pub fn clear() {
    storage::remove(ANALYTICS_KEY);
}
