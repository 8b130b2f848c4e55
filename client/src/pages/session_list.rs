//! "Rentals available": every yoga session as a card.

#[cfg(test)]
#[path = "session_list_test.rs"]
mod session_list_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use yoga_studio::api::types::YogaSession;
use yoga_studio::format::session_heading;
use yoga_studio::{Affordances, Route};

use crate::net::api::ServicesHandle;
use crate::state::auth::AuthContext;
use crate::util::auth::install_auth_guard;
use crate::util::form::flow_error_text;

/// `(label, href)` buttons on one session card.
pub fn card_links(session_id: u64, affordances: Affordances) -> Vec<(&'static str, String)> {
    let mut links = vec![("Detail", Route::SessionDetail(session_id).path())];
    if affordances.can_edit {
        links.push(("Edit", Route::SessionUpdate(session_id).path()));
    }
    links
}

#[component]
pub fn SessionListPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let services = expect_context::<ServicesHandle>();
    install_auth_guard(Route::Sessions, auth, use_navigate());

    let catalog = services.with_value(|s| s.catalog.clone());
    let sessions = LocalResource::new(move || {
        let catalog = catalog.clone();
        async move { catalog.sessions().await.map_err(|e| flow_error_text(&e).unwrap_or_default()) }
    });

    let card = move |session: YogaSession| {
        let links = card_links(session.id, auth.affordances());
        view! {
            <article class="card">
                <h3 class="card__title">{session.name}</h3>
                <p class="card__subtitle">{session_heading(session.date)}</p>
                <img class="card__picture" src="assets/sessions.png" alt="Yoga session"/>
                <p class="card__description">{session.description}</p>
                <div class="card__actions">
                    {links
                        .into_iter()
                        .map(|(label, href)| view! { <a class="button" href=href>{label}</a> })
                        .collect_view()}
                </div>
            </article>
        }
    };

    view! {
        <section class="list">
            <div class="list__header">
                <h2>"Rentals available"</h2>
                <Show when=move || auth.affordances().can_create>
                    <a class="button" href=Route::SessionCreate.path()>"Create"</a>
                </Show>
            </div>
            <div class="list__items">
                {move || match sessions.get() {
                    None => view! { <p>"Loading..."</p> }.into_any(),
                    Some(Err(message)) => view! { <p class="error">{message}</p> }.into_any(),
                    Some(Ok(items)) => items.into_iter().map(card).collect_view().into_any(),
                }}
            </div>
        </section>
    }
}
