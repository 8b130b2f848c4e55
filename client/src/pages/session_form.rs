//! Create and update form for a yoga session (admin only in practice; the
//! server enforces it).

#[cfg(test)]
#[path = "session_form_test.rs"]
mod session_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use yoga_studio::validate::{DESCRIPTION_MAX, field};
use yoga_studio::{Route, SessionForm};

use crate::components::notice_bar::show_notice;
use crate::net::api::ServicesHandle;
use crate::state::auth::AuthContext;
use crate::state::notice::NoticeState;
use crate::util::auth::install_auth_guard;
use crate::util::form::{field_error, flow_error_text, select_options};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(u64),
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "Create session",
            Self::Update(_) => "Update session",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Self::Create => Route::SessionCreate,
            Self::Update(id) => Route::SessionUpdate(id),
        }
    }
}

/// Selected `<option>` value to teacher id; the placeholder option is empty.
pub fn parse_teacher(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

#[component]
pub fn SessionCreatePage() -> impl IntoView {
    view! { <SessionFormView mode=FormMode::Create/> }
}

#[component]
pub fn SessionUpdatePage() -> impl IntoView {
    let params = use_params_map();
    let id = params.read_untracked().get("id").and_then(|v| v.parse::<u64>().ok());
    match id {
        Some(id) => view! { <SessionFormView mode=FormMode::Update(id)/> }.into_any(),
        None => view! { <leptos_router::components::Redirect path="/404"/> }.into_any(),
    }
}

#[component]
fn SessionFormView(mode: FormMode) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let services = expect_context::<ServicesHandle>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    install_auth_guard(mode.route(), auth, navigate.clone());

    let name = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let teacher_id = RwSignal::new(None::<u64>);
    let description = RwSignal::new(String::new());
    let touched = RwSignal::new(false);
    let failure = RwSignal::new(None::<String>);

    let read = move || SessionForm {
        name: name.get_untracked(),
        date: date.get_untracked(),
        teacher_id: teacher_id.get_untracked(),
        description: description.get_untracked(),
    };
    let errors = Memo::new(move |_| {
        name.track();
        date.track();
        teacher_id.track();
        description.track();
        read().validate()
    });

    let catalog = services.with_value(|s| s.catalog.clone());

    let teachers_catalog = catalog.clone();
    let teachers = LocalResource::new(move || {
        let catalog = teachers_catalog.clone();
        async move {
            let (options, error) = select_options(catalog.teachers().await);
            if error.is_some() {
                failure.set(error);
            }
            options
        }
    });

    if let FormMode::Update(id) = mode {
        let catalog = catalog.clone();
        leptos::task::spawn_local(async move {
            match catalog.edit_form(id).await {
                Ok(form) => {
                    name.set(form.name);
                    date.set(form.date);
                    teacher_id.set(form.teacher_id);
                    description.set(form.description);
                }
                Err(e) => failure.set(flow_error_text(&e)),
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = read();
        let catalog = catalog.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = match mode {
                FormMode::Create => catalog.create(&form).await,
                FormMode::Update(id) => catalog.update(id, &form).await,
            };
            match result {
                Ok(done) => {
                    show_notice(notice, done.message);
                    navigate(&done.navigate_to.path(), NavigateOptions::default());
                }
                Err(e) => failure.set(flow_error_text(&e)),
            }
        });
    };

    let error_for = move |name: &'static str| move || field_error(&errors.get(), name, touched.get());

    view! {
        <section class="session-form">
            <header>
                <button type="button" class="button" on:click=move |_| crate::pages::session_detail::go_back()>
                    "Back"
                </button>
                <h1>{mode.title()}</h1>
            </header>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        touched.set(true);
                        name.set(event_target_value(&ev));
                    }
                />
                <p class="field-error">{error_for(field::NAME)}</p>
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| {
                        touched.set(true);
                        date.set(event_target_value(&ev));
                    }
                />
                <p class="field-error">{error_for(field::DATE)}</p>
                <select
                    prop:value=move || teacher_id.get().map(|id| id.to_string()).unwrap_or_default()
                    on:change=move |ev| {
                        touched.set(true);
                        teacher_id.set(parse_teacher(&event_target_value(&ev)));
                    }
                >
                    <option value="">"Teacher"</option>
                    {move || {
                        teachers
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|t| view! { <option value=t.id.to_string()>{t.full_name()}</option> })
                            .collect_view()
                    }}
                </select>
                <p class="field-error">{error_for(field::TEACHER)}</p>
                <textarea
                    placeholder="Description"
                    maxlength=DESCRIPTION_MAX.to_string()
                    prop:value=move || description.get()
                    on:input=move |ev| {
                        touched.set(true);
                        description.set(event_target_value(&ev));
                    }
                ></textarea>
                <p class="field-error">{error_for(field::DESCRIPTION)}</p>
                <button type="submit" disabled=move || !errors.get().is_valid()>"Save"</button>
                <Show when=move || failure.get().is_some()>
                    <p class="error">{move || failure.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </section>
    }
}
