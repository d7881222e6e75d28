mod api;
mod app;
mod config;
mod dashboard;
mod logging;
mod profile;
mod scope;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let (config, rejected) = config::load();
    logging::init(config.log_level);
    for setting in &rejected {
        tracing::warn!("{setting}");
    }
    tracing::info!(
        api = %config.api_base,
        user_id = config.current_user_id,
        "starting comment dashboard"
    );

    let document = web_sys::window()
        .expect("no window")
        .document()
        .expect("no document");

    // Mount into the host element when the page provides one
    if let Some(el) = document.get_element_by_id("commentdeck") {
        let html_el: web_sys::HtmlElement = el.unchecked_into();
        leptos::mount::mount_to(html_el, move || view! { <App config=config /> }).forget();
    } else {
        leptos::mount::mount_to_body(move || view! { <App config=config /> });
    }
}
