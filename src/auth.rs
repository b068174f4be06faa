//! OAuth callback endpoints.
//!
//! Cognito redirects the browser here after sign-in (with an authorization
//! code) and after sign-out (to let us drop the session cookies).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::cognito::Grant;
use crate::cookies::{
    clear_cookie, id_token_cookie, refresh_token_cookie, ID_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginCallbackQuery {
    pub code: Option<String>,
}

/// `GET /auth/login-callback` — exchange the authorization code for the
/// token triple and split it into session cookies.
pub async fn login_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<LoginCallbackQuery>,
) -> Response {
    let Some(code) = params.code else {
        tracing::warn!("login callback without code parameter");
        return (StatusCode::INTERNAL_SERVER_ERROR, "Missing code parameter").into_response();
    };

    let tokens = match state
        .cognito
        .exchange_tokens(Grant::AuthorizationCode(code))
        .await
    {
        Ok(tokens) => tokens,
        Err(e) => {
            tracing::error!(error = %e, "token exchange failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("token exchange failed: {e}"),
            )
                .into_response();
        }
    };

    let has_access_token = tokens.access_token.is_some();
    match (
        has_access_token,
        tokens.id_token.clone(),
        tokens.refresh_token.clone(),
        tokens.expires_in,
    ) {
        (true, Some(id_token), Some(refresh_token), Some(expires_in)) => {
            let jar = jar
                .add(refresh_token_cookie(refresh_token))
                .add(id_token_cookie(id_token, expires_in));
            tracing::info!("login successful, session cookies set");
            (jar, Redirect::temporary("/")).into_response()
        }
        _ => {
            // Diagnostic only: echo whatever the provider sent back.
            tracing::error!("token response missing expected fields");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(tokens)).into_response()
        }
    }
}

/// `GET /auth/logout-callback` — clear both session cookies and send the
/// browser home. The request-scoped identity dies with the request; nothing
/// is held server-side.
pub async fn logout_callback(jar: CookieJar) -> (CookieJar, Redirect) {
    tracing::info!("logout, clearing session cookies");
    let jar = jar
        .add(clear_cookie(ID_TOKEN_COOKIE))
        .add(clear_cookie(REFRESH_TOKEN_COOKIE));
    (jar, Redirect::temporary("/"))
}
