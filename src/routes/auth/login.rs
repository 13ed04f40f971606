use actix_web::{get, http::header, web, HttpResponse};
use std::sync::Arc;

use crate::identity::identity_service::IdentityService;

#[get("/login")]
async fn login(
    _req: actix_web::HttpRequest,
    identity: web::Data<Arc<IdentityService>>,
) -> HttpResponse {
    let url = identity.authorize_url();
    log::info!("Auth URL generated: {}", url);

    HttpResponse::Found().insert_header((header::LOCATION, url.to_string())).finish()
}
