use crate::shared::icons::icon;
use crate::system::auth::context::{do_sign_out, use_auth};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let (menu_open, set_menu_open) = signal(false);

    let sign_out = move |_| {
        set_menu_open.set(false);
        // The dashboard guard redirects once the user is gone.
        do_sign_out(set_auth_state);
    };

    let email = move || {
        auth_state
            .get()
            .user
            .and_then(|u| u.email)
            .unwrap_or_default()
    };

    view! {
        <header class="header">
            <div class="header__content">
                <A href="/" attr:class="header__brand">
                    {icon("shield-check")}
                    <h1 class="header__title">"LexiGuard"</h1>
                </A>

                <div class="header__actions">
                    <Show
                        when=move || auth_state.get().user.is_some()
                        fallback=|| view! {
                            <A href="/auth" attr:class="button button--primary">"Sign In"</A>
                        }
                    >
                        <div class="user-menu">
                            <button
                                class="user-menu__toggle"
                                aria-label="Open user menu"
                                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            >
                                {icon("user")}
                            </button>
                            <Show when=move || menu_open.get()>
                                <div class="user-menu__items">
                                    <div class="user-menu__identity">
                                        <p class="muted">"Signed in as"</p>
                                        <p class="user-menu__email">{email}</p>
                                    </div>
                                    <button class="user-menu__item" on:click=sign_out>
                                        {icon("log-out")}
                                        " Sign Out"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
