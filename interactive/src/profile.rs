use commentdeck_shared::{ClientConfig, ProfileModel, Route};
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::set_title;
use crate::scope::FetchScope;

/// Read-only view of the configured user.
#[component]
pub fn ProfileScreen() -> impl IntoView {
    set_title(Route::Profile);
    let config = expect_context::<ClientConfig>();
    let model = RwSignal::new(ProfileModel::default());
    let scope = FetchScope::for_screen("profile");

    // A failed fetch leaves the loading text up; there is no retry.
    spawn_local(async move {
        let result = api::fetch_current_user(&config, scope.signal()).await;
        if let Some(user) = scope.settle("user", result) {
            model.update(|m| m.load_user(user));
        }
    });

    move || match model.with(|m| m.user().cloned()) {
        None => view! { <div class="commentdeck-loading">"Loading..."</div> }.into_any(),
        Some(user) => {
            let initial = user.initial().map(String::from).unwrap_or_default();
            view! {
                <div class="commentdeck-profile">
                    <header class="commentdeck-header">
                        <h1>{format!("Welcome, {}", user.name)}</h1>
                        <div class="commentdeck-header-user">
                            <div class="commentdeck-avatar">{initial.clone()}</div>
                            <span class="commentdeck-username">{user.name.clone()}</span>
                        </div>
                    </header>

                    <section class="commentdeck-panel">
                        <div class="commentdeck-profile-summary">
                            <div class="commentdeck-avatar commentdeck-avatar-lg">{initial}</div>
                            <div>
                                <h2>{user.name.clone()}</h2>
                                <p class="commentdeck-muted">{user.email.clone()}</p>
                            </div>
                        </div>

                        <div class="commentdeck-fields">
                            <Field label="User ID" value=user.id.to_string() />
                            <Field label="Name" value=user.name.clone() />
                            <Field label="Email ID" value=user.email.clone() />
                            <Field label="Phone" value=user.phone.clone() />
                            <Field label="Address" value=user.address.one_line() wide=true />
                        </div>

                        <div class="commentdeck-back">
                            <A href=Route::Dashboard.path()>"Back to Dashboard"</A>
                        </div>
                    </section>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn Field(label: &'static str, value: String, #[prop(optional)] wide: bool) -> impl IntoView {
    view! {
        <div class="commentdeck-field" class:wide=wide>
            <label class="commentdeck-label">{label}</label>
            <div class="commentdeck-value">{value}</div>
        </div>
    }
}
