use actix_web::web;

use crate::handlers::admin::{
    staff_handler,
    stats_handler,
    transaction_handler,
    user_handler,
};

pub fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            // Customer management routes
            // "/users/pending" must be registered before "/users/{id}"
            .service(
                web::resource("/users")
                    .route(web::get().to(user_handler::get_customers))
            )
            .service(
                web::resource("/users/pending")
                    .route(web::get().to(user_handler::get_pending_customers))
            )
            .service(
                web::resource("/users/{id}/approve")
                    .route(web::post().to(user_handler::approve_customer))
            )
            .service(
                web::resource("/users/{id}")
                    .route(web::put().to(user_handler::update_customer))
                    .route(web::delete().to(user_handler::delete_customer))
            )

            // Staff management routes
            .service(
                web::resource("/staff")
                    .route(web::post().to(staff_handler::create_staff))
            )

            // Oversight routes
            .service(
                web::resource("/transactions")
                    .route(web::get().to(transaction_handler::list_transactions))
            )
            .service(
                web::resource("/dashboard")
                    .route(web::get().to(stats_handler::dashboard_stats))
            )
            .service(
                web::resource("/account-types")
                    .route(web::get().to(user_handler::list_account_types))
            )
    );
}
