// Route exports
pub mod matches;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(matches::configure_service)
        .service(web::scope("/api").configure(matches::configure));
}
