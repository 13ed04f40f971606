use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpRequest;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

const TOKEN_TTL: Duration = Duration::hours(1);

pub fn access_token(req: &HttpRequest) -> Option<String> {
    req.cookie(ACCESS_TOKEN_COOKIE).map(|cookie| cookie.value().to_string())
}

// secure(false) is a local-dev assumption; flip it behind TLS.
pub fn token_cookie(token: String) -> Cookie<'static> {
    Cookie::build(ACCESS_TOKEN_COOKIE, token)
        .path("/")
        .http_only(true)
        .secure(false)
        .same_site(SameSite::Lax)
        .max_age(TOKEN_TTL)
        .finish()
}

pub fn clear_token_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(ACCESS_TOKEN_COOKIE, "").path("/").http_only(true).finish();
    cookie.make_removal();
    cookie
}
