pub mod analytics;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod debounce;
pub mod export;
pub mod format;
pub mod icons;
pub mod storage;
pub mod theme;
pub mod toast;
