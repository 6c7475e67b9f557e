//! Read-only HTTP access to a students database.
//!
//! Every request names the database file in its `path` query parameter and gets a summary built
//! from the file as it is at that moment.
mod controllers;

pub use controllers::get_all_students;
pub use controllers::get_all_students_by_major;
pub use controllers::render_all_students;
pub use controllers::render_major;
pub use controllers::DatabaseQuery;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::info;

use crate::ServerConfig;

/// Registers the students routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_all_students)
        .service(get_all_students_by_major);
}

/// Serves the students routes until the server is stopped.
pub async fn run(config: &ServerConfig) -> std::io::Result<()> {
    let server = HttpServer::new(|| App::new().wrap(Logger::default()).configure(configure))
        .bind((config.host(), config.port()))?
        .run();
    info!(
        "Server is running on http://{}:{}",
        config.host(),
        config.port()
    );
    server.await
}
