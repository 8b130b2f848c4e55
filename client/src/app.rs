//! Root component: context providers and the route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` per tab, created here and never persisted, so a reload
//! starts logged out. Pages reach it through [`AuthContext`] and the use
//! cases through [`ServicesHandle`].

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use yoga_studio::SessionStore;

use crate::components::header::Header;
use crate::components::notice_bar::NoticeBar;
use crate::net::api::{Services, ServicesHandle, api_config, config_error_message};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::me::MePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;
use crate::pages::session_detail::SessionDetailPage;
use crate::pages::session_form::{SessionCreatePage, SessionUpdatePage};
use crate::pages::session_list::SessionListPage;
use crate::state::auth::AuthContext;
use crate::state::notice::NoticeState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = match api_config() {
        Ok(config) => config,
        Err(e) => {
            #[cfg(feature = "csr")]
            log::error!("api config: {e}");
            return view! { <p class="error">{config_error_message(&e)}</p> }.into_any();
        }
    };

    let store = SessionStore::new();
    let services: ServicesHandle = StoredValue::new_local(Services::new(config, &store));
    provide_context(services);
    AuthContext::provide(store);
    provide_context(RwSignal::new(NoticeState::default()));

    view! {
        <Title text="Yoga app"/>
        <Router>
            <Header/>
            <NoticeBar/>
            <main>
                <Routes fallback=|| view! { <Redirect path="/404"/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/sessions") view=SessionListPage/>
                    <Route path=path!("/sessions/detail/:id") view=SessionDetailPage/>
                    <Route path=path!("/sessions/create") view=SessionCreatePage/>
                    <Route path=path!("/sessions/update/:id") view=SessionUpdatePage/>
                    <Route path=path!("/me") view=MePage/>
                    <Route path=path!("/404") view=NotFoundPage/>
                </Routes>
            </main>
        </Router>
    }
    .into_any()
}
