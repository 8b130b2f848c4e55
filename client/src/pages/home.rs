//! Landing page.

use leptos::prelude::*;

use crate::state::auth::{AuthContext, greeting};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    view! {
        <section class="home">
            <h1>"Yoga app"</h1>
            {move || match greeting(&auth.state.get()) {
                Some(name) => view! { <p>"Welcome back, " {name}</p> }.into_any(),
                None => view! { <p>"Log in or register to book a yoga session."</p> }.into_any(),
            }}
        </section>
    }
}
