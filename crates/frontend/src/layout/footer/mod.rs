use crate::system::status::use_connection;
use leptos::prelude::*;

/// Status bar: backend reachability and catalog load state.
#[component]
pub fn Footer() -> impl IntoView {
    let connection = use_connection();

    let server_text = move || {
        if connection.online.get() {
            "Server: Online"
        } else {
            "Server: Offline"
        }
    };
    let server_class = move || {
        if connection.online.get() {
            "status-online"
        } else {
            "status-offline"
        }
    };

    let catalog_text = move || match connection.data_status.get() {
        Some(status) => format!(
            "Chassis: {} {} | Batteries: {} {}",
            status.chassis_count.unwrap_or(0),
            if status.chassis_loaded { "loaded" } else { "not loaded" },
            status.battery_count.unwrap_or(0),
            if status.battery_loaded { "loaded" } else { "not loaded" },
        ),
        None => "Catalog status unknown".to_string(),
    };

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class=server_class>{server_text}</span>
            <span class="status-bar__catalog">{catalog_text}</span>
        </footer>
    }
}
