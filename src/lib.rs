//! Skeleton web app demonstrating OAuth2/OIDC login against AWS Cognito:
//! hosted-UI redirects, code/refresh-token exchange, unverified JWT
//! identity, and cookie-gated protected routes with silent refresh.

pub mod auth;
pub mod cognito;
pub mod config;
pub mod cookies;
pub mod error;
pub mod handlers;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod state;

use axum::middleware as axum_middleware;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use state::AppState;

pub fn router(state: AppState) -> Router {
    // Cognito redirects to the trailing-slash form of the registered
    // callback URIs, so both spellings are routed.
    let auth_routes = Router::new()
        .route("/auth/login-callback", get(auth::login_callback))
        .route("/auth/login-callback/", get(auth::login_callback))
        .route("/auth/logout-callback", get(auth::logout_callback))
        .route("/auth/logout-callback/", get(auth::logout_callback));

    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/protected", get(handlers::protected_page))
        .route("/protected/{*rest}", get(handlers::protected_page))
        .merge(auth_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session_gate,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
