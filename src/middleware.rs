//! Session gate.
//!
//! Runs on every request: reads the `id_token` cookie into a
//! request-scoped [`CurrentUser`], and for paths under `/protected`
//! silently refreshes an expired session via the refresh token or
//! short-circuits with a redirect to re-authentication. The decision is
//! modeled as an explicit [`GateDecision`] rather than thrown control
//! flow.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::cognito::Grant;
use crate::cookies::{id_token_cookie, ID_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
use crate::jwt::decode_claims;
use crate::models::{CurrentUser, IdTokenClaims, TokenResponse};
use crate::state::AppState;

const PROTECTED_PREFIX: &str = "/protected";

/// Outcome of the per-request session decision.
enum GateDecision {
    /// Continue downstream, optionally with an identity and a freshly
    /// refreshed `id_token` cookie to set on the response.
    Continue {
        user: Option<CurrentUser>,
        refreshed: Option<Cookie<'static>>,
    },
    /// Short-circuit with a temporary redirect to re-authentication.
    Redirect(String),
}

pub async fn session_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let path = request.uri().path().to_string();

    match decide(&state, &jar, &path).await? {
        GateDecision::Continue { user, refreshed } => {
            if let Some(ref user) = user {
                request.extensions_mut().insert(user.clone());
            }
            let response = next.run(request).await;
            match refreshed {
                Some(cookie) => Ok((jar.add(cookie), response).into_response()),
                None => Ok(response),
            }
        }
        GateDecision::Redirect(url) => Ok(Redirect::temporary(&url).into_response()),
    }
}

async fn decide(
    state: &AppState,
    jar: &CookieJar,
    path: &str,
) -> Result<GateDecision, StatusCode> {
    let user = jar.get(ID_TOKEN_COOKIE).and_then(|cookie| {
        match decode_claims::<IdTokenClaims>(cookie.value()) {
            Ok(claims) => Some(CurrentUser {
                email: claims.email,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "id_token cookie does not decode, treating as unauthenticated");
                None
            }
        }
    });

    if user.is_some() || !path.starts_with(PROTECTED_PREFIX) {
        return Ok(GateDecision::Continue {
            user,
            refreshed: None,
        });
    }

    // Protected path without a usable id_token: refresh or re-authenticate.
    let Some(refresh_token) = jar.get(REFRESH_TOKEN_COOKIE) else {
        return Ok(GateDecision::Redirect(logout_url(state)?));
    };

    let grant = Grant::RefreshToken(refresh_token.value().to_string());
    match state.cognito.exchange_tokens(grant).await {
        Ok(tokens) => match apply_refresh(tokens) {
            Some((cookie, user)) => {
                tracing::info!(email = %user.email, "session refreshed");
                Ok(GateDecision::Continue {
                    user: Some(user),
                    refreshed: Some(cookie),
                })
            }
            None => {
                tracing::warn!("refresh produced an unusable token response");
                Ok(GateDecision::Redirect(logout_url(state)?))
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "token refresh failed");
            Ok(GateDecision::Redirect(logout_url(state)?))
        }
    }
}

/// Turn a refresh response into a new `id_token` cookie and identity.
/// Requires `id_token` and `expires_in`; the original refresh token stays
/// in place untouched until the provider invalidates it.
fn apply_refresh(tokens: TokenResponse) -> Option<(Cookie<'static>, CurrentUser)> {
    let id_token = tokens.id_token?;
    let expires_in = tokens.expires_in?;
    let claims: IdTokenClaims = decode_claims(&id_token).ok()?;

    let cookie = id_token_cookie(id_token, expires_in);
    let user = CurrentUser {
        email: claims.email,
    };
    Some((cookie, user))
}

fn logout_url(state: &AppState) -> Result<String, StatusCode> {
    state.cognito.logout_url().map_err(|e| {
        tracing::error!(error = %e, "failed to build logout URL");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
