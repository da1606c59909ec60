use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }

    // Runtime config (env.js, window config, ./config.json) is resolved
    // before mounting so the gate and session verification see it.
    spawn_local(async move {
        let cfg = config::init().await;
        log::set_max_level(cfg.log_level);
        log::info!("starting HR Desk against {}", cfg.api_base_url);
        router::mount_app();
    });
}
