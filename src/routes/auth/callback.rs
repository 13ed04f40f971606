use actix_web::{get, http::header, web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;

use crate::identity::identity_service::IdentityService;
use crate::types::error::AppError;
use crate::utils::webutils::token_cookie;

// The provider also appends state/session_state; only the code matters here.
#[derive(Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
}

#[get("/callback")]
async fn callback(
    _req: actix_web::HttpRequest,
    query: web::Query<CallbackQuery>,
    identity: web::Data<Arc<IdentityService>>,
) -> Result<HttpResponse, AppError> {
    let code = match query.into_inner().code {
        Some(code) => code,
        None => return Err(AppError::MissingCode),
    };

    let access_token = match identity.redeem_code(&code).await {
        Ok(token) => token,
        Err(e) => {
            log::error!("Error during auth callback: {}", e);
            return Err(e);
        }
    };
    log::info!("Token acquired successfully");

    Ok(HttpResponse::Found()
        .cookie(token_cookie(access_token))
        .insert_header((header::LOCATION, "/"))
        .finish())
}
