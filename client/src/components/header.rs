//! Top bar with navigation links that follow the session state.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ServicesHandle;
use crate::state::auth::AuthContext;

/// `(label, href)` pairs shown for the current session.
pub fn nav_links(is_logged: bool) -> &'static [(&'static str, &'static str)] {
    if is_logged {
        &[("Sessions", "/sessions"), ("Account", "/me")]
    } else {
        &[("Login", "/login"), ("Register", "/register")]
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let services = expect_context::<ServicesHandle>();
    let navigate = use_navigate();

    let is_logged = move || auth.state.get().is_logged();

    let on_logout = move |_| {
        let home = services.with_value(|s| s.auth.logout());
        navigate(&home.path(), NavigateOptions::default());
    };

    view! {
        <header class="toolbar">
            <a class="toolbar__brand" href="/">"Yoga app"</a>
            <nav class="toolbar__links">
                {move || {
                    nav_links(is_logged())
                        .iter()
                        .map(|(label, href)| view! { <a class="toolbar__link" href=*href>{*label}</a> })
                        .collect_view()
                }}
                <Show when=is_logged>
                    <span class="toolbar__link" role="button" on:click=on_logout.clone()>"Logout"</span>
                </Show>
            </nav>
        </header>
    }
}
