//! Backend reachability and catalog status.
//!
//! `/health` is probed on a fixed interval; the browser's `online`/`offline`
//! events flip the state immediately in between probes.

use contracts::system::data_status::DataStatus;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::{get_json, probe, ApiError};
use crate::shared::config::config;

pub async fn check_health() -> bool {
    probe("/health").await
}

pub async fn fetch_data_status() -> Result<DataStatus, ApiError> {
    get_json("/data-status").await
}

/// Delay between `/health` probes; never below one second.
pub fn probe_interval_ms(secs: u32) -> u32 {
    secs.max(1).saturating_mul(1000)
}

#[derive(Clone, Copy)]
pub struct ConnectionStatus {
    pub online: RwSignal<bool>,
    pub data_status: RwSignal<Option<DataStatus>>,
}

impl ConnectionStatus {
    pub fn new() -> Self {
        let online = web_sys::window()
            .map(|w| w.navigator().on_line())
            .unwrap_or(true);
        Self {
            online: RwSignal::new(online),
            data_status: RwSignal::new(None),
        }
    }

    /// Start the probe loop and browser listeners. Call once from `App`.
    pub fn start_monitor(&self) {
        let online = self.online;
        let data_status = self.data_status;

        let _ = window_event_listener(ev::online, move |_| {
            log::info!("Browser reports online");
            online.set(true);
        });
        let _ = window_event_listener(ev::offline, move |_| {
            log::warn!("Browser reports offline");
            online.set(false);
        });

        let interval_ms = probe_interval_ms(config().monitor.health_interval_secs);
        spawn_local(async move {
            loop {
                let reachable = check_health().await;
                let was_online = online.try_get_untracked().unwrap_or(reachable);
                if reachable != was_online {
                    log::info!(
                        "Backend is {}",
                        if reachable { "reachable" } else { "unreachable" }
                    );
                }
                if online.try_set(reachable).is_some() {
                    break;
                }

                if reachable {
                    match fetch_data_status().await {
                        Ok(status) => {
                            let _ = data_status.try_set(Some(status));
                        }
                        Err(e) => log::warn!("Failed to load data status: {}", e),
                    }
                }

                TimeoutFuture::new(interval_ms).await;
            }
        });
    }
}

impl Default for ConnectionStatus {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_connection() -> ConnectionStatus {
    use_context::<ConnectionStatus>().expect("ConnectionStatus not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_interval() {
        assert_eq!(probe_interval_ms(10), 10_000);
        assert_eq!(probe_interval_ms(0), 1_000);
        assert_eq!(probe_interval_ms(u32::MAX), u32::MAX);
    }
}
