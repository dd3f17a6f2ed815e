use contracts::system::auth::AuthSession;
use web_sys::window;

const SESSION_KEY: &str = "lexiguard_auth_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session so a reload keeps the user signed in
pub fn save_session(session: &AuthSession) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(json) => {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
        Err(e) => log::error!("Failed to serialize auth session: {}", e),
    }
}

/// Load the stored session; a corrupt entry is dropped
pub fn load_session() -> Option<AuthSession> {
    let raw = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Discarding unreadable auth session: {}", e);
            clear_session();
            None
        }
    }
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
