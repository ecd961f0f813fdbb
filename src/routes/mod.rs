use actix_files as fs;
use actix_web::{web, Error};

/// HTTP handler for the board page
pub async fn index() -> Result<fs::NamedFile, Error> {
    Ok(fs::NamedFile::open_async("./static/index.html").await?)
}

/// Configure the HTTP routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/ws").route(web::get().to(crate::websocket::ws_index)))
        .service(web::resource("/").route(web::get().to(index)))
        .service(fs::Files::new("/static", "./static"));
}
