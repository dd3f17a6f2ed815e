use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Auth state has to wrap the router so route guards can read it.
    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
