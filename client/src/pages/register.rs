//! Registration page. Success leads to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use yoga_studio::RegisterForm;
use yoga_studio::validate::field;

use crate::net::api::ServicesHandle;
use crate::util::form::{SubmitAction, field_error};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let services = expect_context::<ServicesHandle>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let touched = RwSignal::new(false);
    let failure = RwSignal::new(None::<String>);

    let read = move || RegisterForm {
        email: email.get_untracked(),
        first_name: first_name.get_untracked(),
        last_name: last_name.get_untracked(),
        password: password.get_untracked(),
    };
    let errors = Memo::new(move |_| {
        email.track();
        first_name.track();
        last_name.track();
        password.track();
        read().validate()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = read();
        let auth = services.with_value(|s| s.auth.clone());
        let navigate = navigate.clone();
        failure.set(None);
        leptos::task::spawn_local(async move {
            let action = SubmitAction::from(auth.submit_register(&form).await);
            failure.update(|shown| *shown = action.banner(shown.take()));
            if let SubmitAction::Navigate(path) = action {
                navigate(&path, NavigateOptions::default());
            }
        });
    };

    let input = move |label: &'static str, kind: &'static str, name: &'static str, signal: RwSignal<String>| {
        view! {
            <input
                type=kind
                placeholder=label
                prop:value=move || signal.get()
                on:input=move |ev| {
                    touched.set(true);
                    signal.set(event_target_value(&ev));
                }
            />
            <p class="field-error">{move || field_error(&errors.get(), name, touched.get())}</p>
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Register"</h1>
                {input("First name", "text", field::FIRST_NAME, first_name)}
                {input("Last name", "text", field::LAST_NAME, last_name)}
                {input("Email", "email", field::EMAIL, email)}
                {input("Password", "password", field::PASSWORD, password)}
                <button type="submit" disabled=move || !errors.get().is_valid()>"Submit"</button>
                <Show when=move || failure.get().is_some()>
                    <p class="error">{move || failure.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </div>
    }
}
