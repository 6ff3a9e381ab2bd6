//! HTTP handlers and route configuration.

mod clients;

use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler, query_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/clients")
                .route("/", web::get().to(clients::find_all))
                .route("/", web::post().to(clients::insert))
                .route("/id/{id}", web::get().to(clients::find_by_id))
                .route("/income/", web::get().to(clients::find_by_income))
                .route(
                    "/incomeGreaterThan/",
                    web::get().to(clients::find_by_income_greater_than),
                )
                .route("/cpf/", web::get().to(clients::find_by_cpf_like))
                .route("/{id}", web::put().to(clients::update))
                .route("/{id}", web::delete().to(clients::delete)),
        );
}
