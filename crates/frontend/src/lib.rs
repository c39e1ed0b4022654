pub mod app;
pub mod app_shell;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // configuration must be settled before any component reads it
    wasm_bindgen_futures::spawn_local(async {
        shared::config::init().await;
        leptos::mount::mount_to_body(app::App);
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
