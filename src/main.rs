use actix_web::{web, App, HttpServer};
use azdo_auth::config::EnvConfig;
use azdo_auth::devops::profile_service::ProfileService;
use azdo_auth::identity::identity_service::IdentityService;
use azdo_auth::routes::configure_routes;
use azdo_auth::views::Views;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    // Secret stays out of the logs.
    log::info!(
        "Identity config: client_id={}, authority={}/{}, redirect_uri={}",
        config.client_id,
        config.authority,
        config.tenant_id,
        config.redirect_uri
    );

    let identity = Arc::new(
        IdentityService::new(&config).expect("Failed to initialize IdentityService"),
    );
    let profiles = Arc::new(
        ProfileService::new(&config).expect("Failed to initialize ProfileService"),
    );
    let views = Arc::new(Views::new().expect("Failed to register view templates"));

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&identity)))
            .app_data(web::Data::new(Arc::clone(&profiles)))
            .app_data(web::Data::new(Arc::clone(&views)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
