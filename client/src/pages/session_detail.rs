//! One yoga session: teacher, attendees, dates, and the member or admin
//! actions.

#[cfg(test)]
#[path = "session_detail_test.rs"]
mod session_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use yoga_studio::catalog::SessionDetail;
use yoga_studio::format::{long_date, session_heading};
use yoga_studio::{FlowError, Route};

use crate::components::notice_bar::show_notice;
use crate::net::api::ServicesHandle;
use crate::state::auth::AuthContext;
use crate::state::notice::NoticeState;
use crate::util::auth::install_auth_guard;
use crate::util::form::flow_error_text;

/// Participation button offered to a member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Participation {
    Join,
    Leave,
}

impl Participation {
    pub fn for_detail(detail: &SessionDetail) -> Option<Self> {
        if !detail.affordances.can_participate {
            return None;
        }
        Some(if detail.is_participant { Self::Leave } else { Self::Join })
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Join => "Participate",
            Self::Leave => "Do not participate",
        }
    }
}

pub fn attendees_label(count: usize) -> String {
    format!("{count} attendees")
}

type DetailSlot = RwSignal<Option<Result<SessionDetail, String>>>;

fn settle(slot: DetailSlot, result: Result<SessionDetail, FlowError>) {
    slot.set(Some(result.map_err(|e| flow_error_text(&e).unwrap_or_default())));
}

#[component]
pub fn SessionDetailPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let services = expect_context::<ServicesHandle>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let session_id = move || params.read().get("id").and_then(|v| v.parse::<u64>().ok());
    let route = Route::SessionDetail(params.read_untracked().get("id").and_then(|v| v.parse().ok()).unwrap_or_default());
    install_auth_guard(route, auth, navigate.clone());

    let catalog = services.with_value(|s| s.catalog.clone());
    let detail: DetailSlot = RwSignal::new(None);

    let load = catalog.clone();
    Effect::new(move || {
        let Some(id) = session_id() else { return };
        let catalog = load.clone();
        leptos::task::spawn_local(async move { settle(detail, catalog.detail(id).await) });
    });

    let toggle_catalog = catalog.clone();
    let on_toggle = move |action: Participation, id: u64| {
        let catalog = toggle_catalog.clone();
        leptos::task::spawn_local(async move {
            let result = match action {
                Participation::Join => catalog.participate(id).await,
                Participation::Leave => catalog.unparticipate(id).await,
            };
            settle(detail, result);
        });
    };

    let on_delete = move |id: u64| {
        let catalog = catalog.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match catalog.delete(id).await {
                Ok(done) => {
                    show_notice(notice, done.message);
                    navigate(&done.navigate_to.path(), NavigateOptions::default());
                }
                Err(e) => show_notice(notice, &flow_error_text(&e).unwrap_or_default()),
            }
        });
    };

    let render = move |d: SessionDetail| {
        let id = d.session.id;
        let participation = Participation::for_detail(&d);
        let can_delete = d.affordances.can_delete;
        let on_toggle = on_toggle.clone();
        let on_delete = on_delete.clone();
        view! {
            <article class="detail">
                <header class="detail__header">
                    <button class="button" on:click=move |_| go_back()>"Back"</button>
                    <h1 class="detail__title">{d.session.name.clone()}</h1>
                    {can_delete.then(|| view! {
                        <button class="button button--warn" on:click=move |_| on_delete(id)>"Delete"</button>
                    })}
                    {participation.map(|p| view! {
                        <button class="button" on:click=move |_| on_toggle(p, id)>{p.label()}</button>
                    })}
                </header>
                <p class="detail__teacher">{yoga_studio::format::display_name(&d.teacher.first_name, &d.teacher.last_name)}</p>
                <p>{attendees_label(d.session.users.len())}</p>
                <p>{session_heading(d.session.date)}</p>
                <div class="detail__description">
                    <p>"Description:"</p>
                    <p>{d.session.description.clone()}</p>
                </div>
                <p>"Create at: " {d.session.created_at.map(long_date)}</p>
                <p>"Last update: " {d.session.updated_at.map(long_date)}</p>
            </article>
        }
    };

    view! {
        {move || match detail.get() {
            None => view! { <p>"Loading..."</p> }.into_any(),
            Some(Err(message)) => view! { <p class="error">{message}</p> }.into_any(),
            Some(Ok(d)) => render.clone()(d).into_any(),
        }}
    }
}

/// Browser back, as the detail and account pages offer.
pub fn go_back() {
    #[cfg(feature = "csr")]
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}
