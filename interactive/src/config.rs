use commentdeck_shared::config::RejectedSetting;
use commentdeck_shared::ClientConfig;
use web_sys::window;

/// Reads `<meta name="{key}" content="...">` from the host page.
fn meta_content(key: &str) -> Option<String> {
    let document = window()?.document()?;
    let el = document
        .query_selector(&format!("meta[name='{key}']"))
        .ok()
        .flatten()?;
    el.get_attribute("content")
}

/// Settings come from meta tags so the same bundle can point at a local
/// stand-in of the data service during development. Rejected settings are
/// returned for logging once the subscriber is installed.
pub fn load() -> (ClientConfig, Vec<RejectedSetting>) {
    ClientConfig::from_lookup(meta_content)
}
