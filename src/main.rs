use actix_web::{web, App, HttpServer};
use std::io;
use std::sync::Arc;
use tokio::signal;

use copa_backend::config::Config;
use copa_backend::db::create_pool;
use copa_backend::http::{health, match_handler, player_handler, tournament_handler, AppState};
use copa_backend::middleware::cors_middleware;
use copa_backend::store::PgStore;
use copa_backend::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> io::Result<()> {
    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    // Initialize telemetry
    init_telemetry();

    // Create database pool and apply migrations
    let db_pool = create_pool(&config)
        .await
        .expect("Failed to create database pool");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");

    // One shared state instance: the per-match locks must span workers.
    let store = Arc::new(PgStore::new(db_pool.clone()));
    let state = web::Data::new(AppState::new(store));

    tracing::info!(
        "Starting copa backend server on {}:{}",
        config.server.host,
        config.server.port
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(state.clone())
            .wrap(cors_middleware())
            .wrap(actix_web::middleware::Logger::default())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(health::health_check))
                    .route(
                        "/tournaments",
                        web::post().to(tournament_handler::create_tournament::<PgStore>),
                    )
                    .route(
                        "/tournaments/{id}/teams",
                        web::post().to(tournament_handler::create_team::<PgStore>),
                    )
                    .route(
                        "/teams/{id}/players",
                        web::post().to(tournament_handler::create_player::<PgStore>),
                    )
                    .route(
                        "/tournaments/{id}/matches",
                        web::post().to(tournament_handler::create_match::<PgStore>),
                    )
                    .route(
                        "/tournaments/{id}/matches",
                        web::get().to(tournament_handler::list_matches::<PgStore>),
                    )
                    .route(
                        "/tournaments/{id}/standings",
                        web::get().to(tournament_handler::standings::<PgStore>),
                    )
                    .route(
                        "/tournaments/{id}/bracket",
                        web::get().to(tournament_handler::bracket::<PgStore>),
                    )
                    .route(
                        "/tournaments/{id}/phases",
                        web::post().to(tournament_handler::activate_phase::<PgStore>),
                    )
                    .route(
                        "/matches/{id}/goals",
                        web::post().to(match_handler::report_goal::<PgStore>),
                    )
                    .route(
                        "/matches/{id}/goals",
                        web::delete().to(match_handler::undo_goal::<PgStore>),
                    )
                    .route(
                        "/matches/{id}/finalize",
                        web::post().to(match_handler::finalize::<PgStore>),
                    )
                    .route(
                        "/matches/{id}/unlock",
                        web::post().to(match_handler::unlock::<PgStore>),
                    )
                    .route(
                        "/players/{id}/card",
                        web::get().to(player_handler::card::<PgStore>),
                    ),
            )
    })
    .bind((config.server.host.clone(), config.server.port))?
    .run();

    // Graceful shutdown
    let server_handle = server.handle();
    tokio::spawn(async move {
        signal::ctrl_c()
            .await
            .expect("Failed to listen for shutdown signal");
        tracing::info!("Shutdown signal received, stopping server...");
        server_handle.stop(true).await;
    });

    server.await
}
