use actix_web::{get, http::header, HttpResponse};

use crate::utils::webutils::clear_token_cookie;

// Idempotent: clearing with no cookie present is just a redirect.
#[get("/logout")]
async fn logout(_req: actix_web::HttpRequest) -> HttpResponse {
    HttpResponse::Found()
        .cookie(clear_token_cookie())
        .insert_header((header::LOCATION, "/"))
        .finish()
}
