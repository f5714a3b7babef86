use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;

use krest_api::app;
use krest_api::routes::AppState;
use krest_infra::broker::MemoryBroker;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Krest gateway");

    // Load configuration
    let server_host = env::var("KREST_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = env::var("KREST_PORT")
        .unwrap_or_else(|_| "8082".to_string())
        .parse::<u16>()
        .expect("KREST_PORT must be a valid port number");

    let bind_address = format!("{}:{}", server_host, server_port);
    info!("Server will bind to: {}", bind_address);

    // The in-process broker stands in for a networked client; topics are
    // created through the admin endpoints after startup.
    let state = web::Data::new(AppState::new(MemoryBroker::new()));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(app::configure::<MemoryBroker>)
    })
    .bind(&bind_address)?
    .run()
    .await
}
