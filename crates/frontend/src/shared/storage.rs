//! `localStorage` access. Every call degrades to a no-op when storage is
//! unavailable (private mode, sandboxed iframe).

use web_sys::{window, Storage};

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

pub fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for '{}'", key);
        }
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn get_bool(key: &str) -> Option<bool> {
    get(key).map(|v| v == "true")
}

pub fn set_bool(key: &str, value: bool) {
    set(key, if value { "true" } else { "false" });
}
