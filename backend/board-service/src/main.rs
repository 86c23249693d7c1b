use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use board_service::handlers;
use board_service::middleware::BasicAuthMiddleware;
use board_service::store::{PgPostStore, SharedPostStore};
use board_service::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "board_service=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(anyhow::Error::msg)?;
    tracing::info!(
        env = %config.app.env,
        host = %config.app.host,
        port = config.app.port,
        "configuration loaded"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .context("failed to connect to postgres")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    let store: SharedPostStore = Arc::new(PgPostStore::new(pool));
    let users = config.auth.users.clone();
    let bind_address = (config.app.host.clone(), config.app.port);

    tracing::info!(host = %bind_address.0, port = bind_address.1, "listening for connections");

    HttpServer::new(move || {
        App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(web::Data::new(store.clone()))
            .route("/health", web::get().to(handlers::health_summary))
            .service(
                web::scope("/posts")
                    .wrap(BasicAuthMiddleware::new(users.clone()))
                    .service(
                        web::resource("")
                            .route(web::get().to(handlers::list))
                            .route(web::post().to(handlers::create)),
                    )
                    .route("/delete", web::post().to(handlers::destroy))
                    .default_service(web::route().to(handlers::bad_request)),
            )
            .default_service(web::route().to(handlers::bad_request))
    })
    .bind(bind_address)?
    .run()
    .await?;

    tracing::info!("shutdown complete");
    Ok(())
}
