use crate::system::auth::context::use_auth;
use crate::system::auth::guard::{RequireAnonymous, RequireAuth};
use crate::system::pages::auth_page::AuthPage;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::landing::LandingPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn LandingRoute() -> impl IntoView {
    view! {
        <RequireAnonymous>
            <LandingPage />
        </RequireAnonymous>
    }
}

#[component]
fn AuthRoute() -> impl IntoView {
    view! {
        <RequireAnonymous>
            <AuthPage />
        </RequireAnonymous>
    }
}

#[component]
fn DashboardRoute() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardPage />
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    // Hold every route back until the stored session has been checked,
    // otherwise a signed-in user briefly lands on the public pages.
    view! {
        <Show
            when=move || !auth_state.get().loading
            fallback=|| view! {
                <div class="splash">
                    <p>"Loading..."</p>
                </div>
            }
        >
            <Router>
                <Routes fallback=|| view! { <Redirect path="/" /> }>
                    <Route path=path!("/") view=LandingRoute />
                    <Route path=path!("/auth") view=AuthRoute />
                    <Route path=path!("/dashboard") view=DashboardRoute />
                </Routes>
            </Router>
        </Show>
    }
}
