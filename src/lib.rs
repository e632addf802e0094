pub mod app;
pub mod availability;
pub mod components;
pub mod consts;
pub mod error;
pub mod i18n;
#[cfg(feature = "ssr")]
pub mod middleware;
pub mod page;
pub mod providers;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::hydrate_body(App);
}
