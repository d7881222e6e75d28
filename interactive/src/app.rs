use commentdeck_shared::{ClientConfig, Route};
use leptos::prelude::*;
use leptos_router::components::{Route as RouteView, Router, Routes};
use leptos_router::path;
use web_sys::window;

use crate::dashboard::CommentsDashboard;
use crate::profile::ProfileScreen;

/// Top-level SPA. Each route mount builds its screen from scratch, so
/// leaving the dashboard drops its search, sort and page.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Router>
            <main class="commentdeck">
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <RouteView path=path!("/") view=CommentsDashboard />
                    <RouteView path=path!("/profile") view=ProfileScreen />
                </Routes>
            </main>
        </Router>
    }
}

pub fn set_title(route: Route) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(route.title());
    }
}
