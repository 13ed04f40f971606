use actix_web::web;

pub mod auth;
pub mod home;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home::home);
    cfg.service(
        web::scope("/auth")
            .service(auth::login::login)
            .service(auth::callback::callback)
            .service(auth::logout::logout),
    );
}
