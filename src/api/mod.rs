pub mod pages;
pub mod resumen;

use crate::error::{form_error_handler, json_error_handler};
use actix_web::web;

/// `GET /` and `POST /resumen`
pub fn configure_pages(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(form_error_handler))
        .service(web::resource("/").route(web::get().to(resumen::index)))
        .service(web::resource("/resumen").route(web::post().to(resumen::resumen_form)));
}

/// JSON routes, mounted under the API prefix
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(web::resource("/resumen").route(web::post().to(resumen::resumen_api)));
}
