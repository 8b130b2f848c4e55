//! Snack bar rendering the current notice with a "Close" action.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

/// Show a notice and schedule its auto-close.
pub fn show_notice(notice: RwSignal<NoticeState>, message: &str) {
    let mut seq = 0;
    notice.update(|n| seq = n.show(message));

    #[cfg(feature = "csr")]
    gloo_timers::callback::Timeout::new(crate::state::notice::NOTICE_MS, move || {
        notice.update(|n| n.expire(seq));
    })
    .forget();
    #[cfg(not(feature = "csr"))]
    let _ = seq;
}

#[component]
pub fn NoticeBar() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    view! {
        <Show when=move || notice.get().message.is_some()>
            <div class="snack-bar" role="status">
                <span>{move || notice.get().message.unwrap_or_default()}</span>
                <button class="snack-bar__close" on:click=move |_| notice.update(NoticeState::close)>
                    "Close"
                </button>
            </div>
        </Show>
    }
}
