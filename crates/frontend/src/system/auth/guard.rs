use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Renders children for signed-in users, otherwise redirects to `redirect_to`
#[component]
pub fn RequireAuth(
    #[prop(default = "/auth")] redirect_to: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().user.is_some()
            fallback=move || view! { <Redirect path=redirect_to /> }
        >
            {children()}
        </Show>
    }
}

/// Renders children for anonymous visitors, sends signed-in users to `redirect_to`
#[component]
pub fn RequireAnonymous(
    #[prop(default = "/dashboard")] redirect_to: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().user.is_none()
            fallback=move || view! { <Redirect path=redirect_to /> }
        >
            {children()}
        </Show>
    }
}
