#![recursion_limit = "256"]
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod assets;
pub mod catalog;
pub mod contact;
pub mod i18n;
pub mod modal;
pub mod site;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Should be able to set up console logging");

    let content = SiteContent::load();
    leptos::mount::hydrate_body(move || {
        provide_context(content.clone());
        view! { <App /> }
    });
}
