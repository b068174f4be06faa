//! Session cookie construction.
//!
//! Both cookies are HttpOnly, Secure, SameSite=Lax and scoped to `/`.
//! `id_token` lives for the token's `expires_in`; `refresh_token` for 29
//! days (Cognito's console default is 30, one day of slack).

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

pub const ID_TOKEN_COOKIE: &str = "id_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

pub const REFRESH_TOKEN_DAYS: i64 = 29;

fn session_cookie(name: &'static str, value: String, max_age: Duration) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .build()
}

pub fn id_token_cookie(id_token: String, expires_in_secs: u64) -> Cookie<'static> {
    session_cookie(
        ID_TOKEN_COOKIE,
        id_token,
        Duration::seconds(expires_in_secs as i64),
    )
}

pub fn refresh_token_cookie(refresh_token: String) -> Cookie<'static> {
    session_cookie(
        REFRESH_TOKEN_COOKIE,
        refresh_token,
        Duration::days(REFRESH_TOKEN_DAYS),
    )
}

/// Removal cookie: empty value, zero max-age, same flags as the original.
pub fn clear_cookie(name: &'static str) -> Cookie<'static> {
    session_cookie(name, String::new(), Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn id_token_cookie_flags_and_max_age() {
        let cookie = id_token_cookie("tok".into(), 3600);
        assert_eq!(cookie.name(), "id_token");
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn refresh_token_cookie_lives_29_days() {
        let cookie = refresh_token_cookie("opaque".into());
        assert_eq!(cookie.max_age(), Some(Duration::days(29)));
    }

    #[test]
    fn clear_cookie_is_empty_with_zero_max_age() {
        let cookie = clear_cookie(ID_TOKEN_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.path(), Some("/"));
    }
}
