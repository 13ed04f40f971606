use actix_web::{get, http::header, web, HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::devops::profile_service::ProfileService;
use crate::types::error::AppError;
use crate::utils::webutils::{access_token, clear_token_cookie};
use crate::views::Views;

// Anonymous vs authenticated is re-derived from the cookie on every hit;
// there is no server-side session state.
#[get("/")]
async fn home(
    req: HttpRequest,
    profiles: web::Data<Arc<ProfileService>>,
    views: web::Data<Arc<Views>>,
) -> Result<HttpResponse, AppError> {
    let token = match access_token(&req) {
        Some(token) => token,
        None => {
            return Ok(HttpResponse::Ok()
                .content_type(header::ContentType::html())
                .body(views.login_page()?))
        }
    };

    match profiles.get_user_profile(&token).await {
        Ok(profile) => {
            log::info!("User profile fetched successfully: {}", profile.display_name);
            Ok(HttpResponse::Ok()
                .content_type(header::ContentType::html())
                .body(views.profile_page(&profile)?))
        }
        Err(e) => {
            // Expired or revoked token: drop the cookie and bounce back to
            // the login view instead of surfacing the upstream error.
            log::error!("Error fetching user profile: {}", e);
            Ok(HttpResponse::Found()
                .cookie(clear_token_cookie())
                .insert_header((header::LOCATION, "/"))
                .finish())
        }
    }
}
