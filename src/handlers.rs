use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Serialize;

use crate::models::CurrentUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HomePage {
    pub sign_in_url: String,
    pub sign_out_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// `GET /` — sign-in/out URLs plus the current email, if logged in.
pub async fn home(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
) -> Result<Json<HomePage>, StatusCode> {
    let sign_in_url = state.cognito.login_url().map_err(|e| {
        tracing::error!(error = %e, "failed to build sign-in URL");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let sign_out_url = state.cognito.logout_url().map_err(|e| {
        tracing::error!(error = %e, "failed to build sign-out URL");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(HomePage {
        sign_in_url,
        sign_out_url,
        email: user.map(|Extension(user)| user.email),
    }))
}

#[derive(Serialize)]
pub struct ProtectedPage {
    pub email: String,
}

/// `GET /protected[/*]` — only reachable through the session gate, which
/// guarantees the identity extension is present.
pub async fn protected_page(
    Extension(user): Extension<CurrentUser>,
) -> Json<ProtectedPage> {
    Json(ProtectedPage { email: user.email })
}

pub async fn health() -> &'static str {
    "OK"
}
