use chrono::Utc;
use contracts::system::auth::{AuthSession, AuthUser};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    /// True until the stored session has been checked on startup
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let state = match restore_session().await {
                Some(user) => {
                    log::info!("Restored session for {}", user.uid);
                    AuthState::signed_in(user)
                }
                None => AuthState::signed_out(),
            };
            set_auth_state.set(state);
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Validates the stored session against the provider, refreshing once if needed
async fn restore_session() -> Option<AuthUser> {
    let mut session = storage::load_session()?;

    if session.needs_refresh(Utc::now()) {
        match api::refresh(&session).await {
            Ok(fresh) => {
                storage::save_session(&fresh);
                session = fresh;
            }
            Err(e) => return fall_back(session, e),
        }
    }

    match api::lookup(&session.id_token).await {
        Ok(user) => Some(user),
        Err(e) if !discards_session(&e) => fall_back(session, e),
        Err(_) => {
            // Token rejected, try refresh
            let fresh = match api::refresh(&session).await {
                Ok(fresh) => fresh,
                Err(e) => return fall_back(session, e),
            };
            storage::save_session(&fresh);
            match api::lookup(&fresh.id_token).await {
                Ok(user) => Some(user),
                Err(e) => fall_back(fresh, e),
            }
        }
    }
}

/// Only an answer from the provider ends a stored session; transport
/// failures leave it for the next start.
fn discards_session(err: &ApiError) -> bool {
    matches!(err, ApiError::Auth(_) | ApiError::Http { .. })
}

fn fall_back(session: AuthSession, err: ApiError) -> Option<AuthUser> {
    if discards_session(&err) {
        log::warn!("Stored session rejected: {}", err);
        storage::clear_session();
        None
    } else {
        log::warn!("Could not verify stored session, keeping it: {}", err);
        Some(session.user)
    }
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Bearer token for the analysis service, refreshed when close to expiry
pub async fn id_token() -> Result<String, ApiError> {
    let session = storage::load_session()
        .ok_or_else(|| ApiError::Auth("You are not signed in.".into()))?;

    if !session.needs_refresh(Utc::now()) {
        return Ok(session.id_token);
    }

    let fresh = api::refresh(&session).await?;
    storage::save_session(&fresh);
    Ok(fresh.id_token)
}

/// Sign in or sign up, persisting the session and updating auth state
pub async fn do_authenticate(
    mode: AuthMode,
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let session: AuthSession = match mode {
        AuthMode::SignIn => api::sign_in(email, password).await?,
        AuthMode::SignUp => api::sign_up(email, password).await?,
    };

    storage::save_session(&session);
    log::info!("Signed in as {}", session.user.uid);
    set_auth_state.set(AuthState::signed_in(session.user));

    Ok(())
}

/// Sign out locally; the provider keeps no server-side session to revoke
pub fn do_sign_out(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::signed_out());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_loading() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_signed_in_and_out_finish_loading() {
        let user = AuthUser {
            uid: "uid-1".into(),
            email: Some("a@b.co".into()),
        };
        assert!(!AuthState::signed_in(user.clone()).loading);
        assert_eq!(AuthState::signed_in(user.clone()).user, Some(user));
        assert_eq!(AuthState::signed_out(), AuthState { user: None, loading: false });
    }

    #[test]
    fn test_provider_rejection_discards_session() {
        assert!(discards_session(&ApiError::Auth(
            "Your session has expired. Please sign in again.".into()
        )));
        assert!(discards_session(&ApiError::Http {
            status: 400,
            detail: "TOKEN_EXPIRED".into(),
        }));
    }

    #[test]
    fn test_offline_keeps_session() {
        assert!(!discards_session(&ApiError::Network(
            "Failed to fetch".into()
        )));
        assert!(!discards_session(&ApiError::Decode("unexpected EOF".into())));
    }
}
