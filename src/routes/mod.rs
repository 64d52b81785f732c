mod auth;
mod not_found;

pub(crate) use auth::AuthPage;
pub(crate) use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=AuthPage />
            <Route path=path!("/login") view=AuthPage />
            <Route path=path!("/register") view=AuthPage />
        </Routes>
    }
}
