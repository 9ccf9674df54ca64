use leptos::{mount_to_body, view};
use porcana_app::{App, AppConfig};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn main() {
    let config = AppConfig::default();

    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(config.log_level);
    log::info!("Preparing to mount client...");

    mount_to_body(move |cx| {
        view! { cx, <App config=config/> }
    });
}
