use std::io;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use tokio_util::sync::CancellationToken;

use qotd_service::db::establish_connection_pool;
use qotd_service::models::config::ServerConfig;
use qotd_service::notifier::WebhookNotifier;
use qotd_service::repository::DieselRepository;
use qotd_service::routes;
use qotd_service::scheduler::run_daily_rotation;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ServerConfig::from_env().map_err(io::Error::other)?;

    let pool = establish_connection_pool(&config.database_url).map_err(io::Error::other)?;
    // Unreachable storage at boot is the one fatal storage error.
    pool.get().map_err(io::Error::other)?;
    log::info!("connected to database at {}", config.database_url);

    let repo = DieselRepository::new(pool);

    let notifier = WebhookNotifier::new(
        config.webhook_url.clone(),
        config.bot_name.clone(),
        config.avatar_url.clone(),
    )
    .map_err(io::Error::other)?;

    let cancel = CancellationToken::new();
    tokio::spawn(run_daily_rotation(
        repo.clone(),
        notifier,
        config.rotation_category.clone(),
        config.rotation_time,
        cancel.clone(),
    ));
    log::info!(
        "scheduler started: category {} rotates daily at {} UTC",
        config.rotation_category,
        config.rotation_time
    );

    let bind_address = config.bind_address.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(config.clone()))
            .service(routes::main::index)
            .service(routes::quotes::get_quote)
            .service(Files::new("/assets", "./assets"))
            .default_service(web::route().to(routes::main::default_response))
    })
    .bind(&bind_address)?
    .run();

    log::info!("listening on {bind_address}");
    let result = server.await;

    cancel.cancel();
    result
}
