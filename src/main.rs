use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use meetbook::calendar::{self, Calendar};
use meetbook::config::Config;
use meetbook::handlers;
use meetbook::provider::memory::InMemoryProvider;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::from_env();

    let provider = match &config.seed_path {
        Some(path) => InMemoryProvider::from_seed_file(path).unwrap_or_else(|e| {
            log::warn!("{e}, starting with no meetings");
            InMemoryProvider::new()
        }),
        None => InMemoryProvider::new(),
    }
    .with_delay(config.lookup_delay);

    let loaded = Calendar::load(Arc::new(provider)).await;
    let handle = calendar::service::spawn(loaded);

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(handle.clone()))
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
