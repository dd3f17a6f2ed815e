use chrono::Utc;
use contracts::system::auth::{
    friendly_auth_error, AuthSession, AuthUser, LookupRequest, LookupResponse, PasswordAuthRequest,
    PasswordAuthResponse, ProviderErrorEnvelope, RefreshTokenResponse,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::ApiError;
use crate::shared::config::app_config;

const IDENTITY_TOOLKIT_BASE: &str = "https://identitytoolkit.googleapis.com/v1";
const SECURE_TOKEN_URL: &str = "https://securetoken.googleapis.com/v1/token";

fn toolkit_url(method: &str) -> String {
    format!(
        "{}/accounts:{}?key={}",
        IDENTITY_TOOLKIT_BASE,
        method,
        urlencoding::encode(&app_config().firebase_api_key)
    )
}

/// Decode a provider response, mapping its error envelope to friendly text
async fn read_provider<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        let code = serde_json::from_str::<ProviderErrorEnvelope>(&body)
            .map(|env| env.code().to_string())
            .unwrap_or_default();
        log::warn!(
            "Identity provider rejected request: {} {}",
            response.status(),
            code
        );
        return Err(ApiError::Auth(friendly_auth_error(&code).to_string()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn password_auth(method: &str, email: String, password: String) -> Result<AuthSession, ApiError> {
    let request = PasswordAuthRequest::new(email, password);

    let response = Request::post(&toolkit_url(method))
        .json(&request)?
        .send()
        .await?;

    let body: PasswordAuthResponse = read_provider(response).await?;
    Ok(AuthSession::from_password_response(body, Utc::now()))
}

/// Sign in with email and password
pub async fn sign_in(email: String, password: String) -> Result<AuthSession, ApiError> {
    password_auth("signInWithPassword", email, password).await
}

/// Create an account; the provider signs the new user in immediately
pub async fn sign_up(email: String, password: String) -> Result<AuthSession, ApiError> {
    password_auth("signUp", email, password).await
}

/// Resolve the user behind an id token (used to validate a restored session)
pub async fn lookup(id_token: &str) -> Result<AuthUser, ApiError> {
    let request = LookupRequest {
        id_token: id_token.to_string(),
    };

    let response = Request::post(&toolkit_url("lookup"))
        .json(&request)?
        .send()
        .await?;

    let body: LookupResponse = read_provider(response).await?;
    body.users
        .into_iter()
        .next()
        .map(|u| AuthUser {
            uid: u.local_id,
            email: u.email,
        })
        .ok_or_else(|| ApiError::Auth("Your session has expired. Please sign in again.".into()))
}

/// Exchange the refresh token for a fresh id token
pub async fn refresh(session: &AuthSession) -> Result<AuthSession, ApiError> {
    let url = format!(
        "{}?key={}",
        SECURE_TOKEN_URL,
        urlencoding::encode(&app_config().firebase_api_key)
    );
    let body = format!(
        "grant_type=refresh_token&refresh_token={}",
        urlencoding::encode(&session.refresh_token)
    );

    let response = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)?
        .send()
        .await?;

    let body: RefreshTokenResponse = read_provider(response).await?;
    Ok(session.refreshed(body, Utc::now()))
}
