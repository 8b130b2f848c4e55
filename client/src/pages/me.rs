//! Account page: profile, admin badge or account deletion.

#[cfg(test)]
#[path = "me_test.rs"]
mod me_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use yoga_studio::api::types::User;
use yoga_studio::format::{display_name, long_date};
use yoga_studio::{AccountView, Route};

use crate::components::notice_bar::show_notice;
use crate::net::api::ServicesHandle;
use crate::state::auth::AuthContext;
use crate::state::notice::NoticeState;
use crate::util::auth::install_auth_guard;
use crate::util::form::flow_error_text;

/// `Name: John DOE` and `Email: ...` lines.
pub fn profile_lines(user: &User) -> [String; 2] {
    [
        format!("Name: {}", display_name(&user.first_name, &user.last_name)),
        format!("Email: {}", user.email),
    ]
}

#[component]
pub fn MePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let services = expect_context::<ServicesHandle>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    install_auth_guard(Route::Me, auth, navigate.clone());

    let account = services.with_value(|s| s.account.clone());

    let load = account.clone();
    let view_data = LocalResource::new(move || {
        let account = load.clone();
        async move { account.load().await.map_err(|e| flow_error_text(&e).unwrap_or_default()) }
    });

    let on_delete = move |_| {
        let account = account.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match account.delete().await {
                Ok(done) => {
                    show_notice(notice, done.message);
                    navigate(&done.navigate_to.path(), NavigateOptions::default());
                }
                Err(e) => show_notice(notice, &flow_error_text(&e).unwrap_or_default()),
            }
        });
    };

    let render = move |data: AccountView| {
        let [name, email] = profile_lines(&data.user);
        let on_delete = on_delete.clone();
        view! {
            <article class="account">
                <header>
                    <button class="button" on:click=move |_| crate::pages::session_detail::go_back()>"Back"</button>
                    <h1>"User information"</h1>
                </header>
                <p>{name}</p>
                <p>{email}</p>
                {if data.can_delete {
                    view! {
                        <div class="account__delete">
                            <p>"Delete my account:"</p>
                            <button class="button button--warn" on:click=on_delete>"Delete"</button>
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <p class="account__admin">"You are admin"</p> }.into_any()
                }}
                <p>"Create at: " {data.user.created_at.map(long_date)}</p>
                <p>"Last update: " {data.user.updated_at.map(long_date)}</p>
            </article>
        }
    };

    view! {
        {move || match view_data.get() {
            None => view! { <p>"Loading..."</p> }.into_any(),
            Some(Err(message)) => view! { <p class="error">{message}</p> }.into_any(),
            Some(Ok(data)) => render.clone()(data).into_any(),
        }}
    }
}
