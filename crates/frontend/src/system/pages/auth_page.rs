use contracts::system::auth::validate_credentials;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::system::auth::context::{do_authenticate, use_auth, AuthMode};

#[component]
pub fn AuthPage() -> impl IntoView {
    let (mode, set_mode) = signal(AuthMode::SignIn);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get().trim().to_string();
        let password_val = password.get();

        if let Err(msg) = validate_credentials(&email_val, &password_val) {
            set_error_message.set(Some(msg.to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let mode_val = mode.get();
        spawn_local(async move {
            // On success the route guard moves the user to the dashboard
            if let Err(e) = do_authenticate(mode_val, email_val, password_val, set_auth_state).await {
                log::warn!("Authentication failed: {}", e);
                set_error_message.set(Some(e.to_string()));
                set_is_loading.set(false);
            }
        });
    };

    let toggle_mode = move |_| {
        set_mode.update(|m| {
            *m = match m {
                AuthMode::SignIn => AuthMode::SignUp,
                AuthMode::SignUp => AuthMode::SignIn,
            }
        });
        set_error_message.set(None);
    };

    let is_sign_in = move || mode.get() == AuthMode::SignIn;

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <div class="auth-brand">
                    {icon("shield-check")}
                    <h1>"Welcome to LexiGuard"</h1>
                    <p>
                        "Your personal contract guardian. Gain clarity and confidence "
                        "in every document you sign."
                    </p>
                </div>

                <div class="auth-form">
                    <h2>{move || if is_sign_in() { "Sign In" } else { "Create Account" }}</h2>
                    <p class="auth-form__subtitle">
                        {move || {
                            if is_sign_in() {
                                "Welcome back! Please enter your details."
                            } else {
                                "Let's get you started."
                            }
                        }}
                    </p>

                    <form on:submit=on_submit novalidate=true>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                autocomplete="email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <div class="password-field">
                                <input
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    id="password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    disabled=move || is_loading.get()
                                />
                                <button
                                    type="button"
                                    class="password-field__toggle"
                                    title=move || if show_password.get() { "Hide password" } else { "Show password" }
                                    on:click=move |_| set_show_password.update(|v| *v = !*v)
                                >
                                    {move || if show_password.get() { icon("eye-off") } else { icon("eye") }}
                                </button>
                            </div>
                        </div>

                        <Show when=move || error_message.get().is_some()>
                            <div class="error-message">
                                {move || error_message.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || is_loading.get()
                        >
                            {move || {
                                if is_loading.get() {
                                    "Processing..."
                                } else if is_sign_in() {
                                    "Sign In"
                                } else {
                                    "Create Account"
                                }
                            }}
                        </button>
                    </form>

                    <div class="auth-form__toggle">
                        <button type="button" class="link-button" on:click=toggle_mode>
                            {move || {
                                if is_sign_in() {
                                    "Don't have an account? Sign Up"
                                } else {
                                    "Already have an account? Sign In"
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
