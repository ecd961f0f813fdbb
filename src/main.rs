use actix_web::{web, App, HttpServer};
use log::info;

mod game;
mod models;
mod routes;
mod websocket;

use models::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting chess relay server at http://127.0.0.1:3000");

    // One shared game per process: seat map, board, and live sessions.
    let app_state = web::Data::new(AppState::new());

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure_routes)
    })
    .bind("127.0.0.1:3000")?
    .run()
    .await
}
