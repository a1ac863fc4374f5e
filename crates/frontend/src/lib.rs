pub mod app;
pub mod dashboards;
pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // effects and spawn_local need the wasm executor; there is no mount_to_body here
    _ = any_spawner::Executor::init_wasm_bindgen();

    app::mount_when_ready();
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
