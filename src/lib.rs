#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
pub mod content;
pub mod motion;
pub mod nav;
pub mod observer;
pub mod reveal;
pub mod scroll;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    #[cfg(debug_assertions)]
    let level = log::Level::Debug;
    #[cfg(not(debug_assertions))]
    let level = log::Level::Info;
    // a second init (hot reload) fails harmlessly
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(App);
}
