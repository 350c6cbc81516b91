use actix_web::web;

pub mod account;
pub mod admin;
pub mod auth;
pub mod backend_health;
pub mod registration;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::auth_login);

    // Customer account routes
    cfg.service(
        web::scope("/account")
            .service(account::deposit)
            .service(account::transfer)
            .service(account::payment)
            .service(account::dashboard),
    );

    // Admin routes
    admin::init_admin_routes(cfg);
}
