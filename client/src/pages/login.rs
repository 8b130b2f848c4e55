//! Login page: email + password against `auth/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use yoga_studio::LoginForm;
use yoga_studio::validate::field;

use crate::net::api::ServicesHandle;
use crate::util::form::{SubmitAction, field_error};

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = expect_context::<ServicesHandle>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let touched = RwSignal::new(false);
    let failure = RwSignal::new(None::<String>);

    let errors = Memo::new(move |_| LoginForm { email: email.get(), password: password.get() }.validate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        let auth = services.with_value(|s| s.auth.clone());
        let navigate = navigate.clone();
        failure.set(None);
        leptos::task::spawn_local(async move {
            let action = SubmitAction::from(auth.submit_login(&form).await);
            failure.update(|shown| *shown = action.banner(shown.take()));
            if let SubmitAction::Navigate(path) = action {
                navigate(&path, NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Login"</h1>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        touched.set(true);
                        email.set(event_target_value(&ev));
                    }
                />
                <p class="field-error">{move || field_error(&errors.get(), field::EMAIL, touched.get())}</p>
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        touched.set(true);
                        password.set(event_target_value(&ev));
                    }
                />
                <p class="field-error">{move || field_error(&errors.get(), field::PASSWORD, touched.get())}</p>
                <button type="submit" disabled=move || !errors.get().is_valid()>"Submit"</button>
                <Show when=move || failure.get().is_some()>
                    <p class="error">{move || failure.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </div>
    }
}
